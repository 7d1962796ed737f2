// only the tokens the stylesheets reference; a warm film-print palette
pub const CSS_VARIABLES: &str = r#"
:root {
  --primary: #C2410C;
  --primary-dark: #9A3412;
  --error: #DC2626;

  --neutral-100: #F5F1EB;
  --neutral-200: #E7E0D6;
  --neutral-400: #A8A29E;
  --neutral-500: #78716C;
  --neutral-600: #57534E;
  --neutral-800: #292524;
  --neutral-900: #1C1917;

  --background: var(--neutral-100);
  --surface: #FFFDF9;
  --border: var(--neutral-200);
  --border-focus: var(--primary);
  --carousel-backdrop: rgba(28, 25, 23, 0.94);

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFDF9;

  --header-height: 56px;
  --container-width: 1200px;

  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  --radius-md: 4px;
  --radius-lg: 10px;

  --shadow-sm: 0 1px 2px rgba(28, 25, 23, 0.08);
  --shadow-md: 0 3px 8px rgba(28, 25, 23, 0.12);
  --shadow-lg: 0 12px 28px rgba(28, 25, 23, 0.22);

  --transition-fast: 120ms;
  --transition-normal: 220ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}"#;
