use constcat::concat;

mod components;
mod variables;

use components::BASE_COMPONENTS;
use variables::CSS_VARIABLES;

pub const MODERN_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
}

.gallery-page {
  padding: var(--space-8) var(--space-4);
}

.gallery-toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-12);
}

.gallery-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--neutral-800);
}

.status-message {
  color: var(--text-tertiary);
}
"#
);
