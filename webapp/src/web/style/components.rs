pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  outline: none;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:disabled {
  background-color: var(--neutral-400);
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-danger {
  background-color: var(--error);
  color: var(--text-inverse);
}

.btn-block {
  width: 100%;
}

/* Upload form */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  color: var(--text-secondary);
}

.form-input {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

.form-input:focus {
  border-color: var(--border-focus);
  outline: none;
}

.upload-preview {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.upload-preview img {
  width: 96px;
  height: 96px;
  object-fit: cover;
  border-radius: var(--radius-md);
  background-color: var(--neutral-200);
}

.form-error {
  color: var(--error);
  text-align: center;
  margin-top: var(--space-4);
}

/* Photo grid */
.photo-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
}

.photo-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.photo-card:hover {
  transform: scale(1.05);
}

.photo-card img {
  width: 100%;
  height: 12rem;
  object-fit: cover;
  background-color: var(--neutral-200);
}

.photo-card p {
  padding: var(--space-4);
  color: var(--text-secondary);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.empty-state {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--text-tertiary);
}

/* Modals
 *
 * the backdrop is a sibling of the content, stacked underneath it, so a click
 * lands on exactly one of them
 */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 60;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.5);
}

.modal-content {
  position: relative;
  width: 100%;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  max-height: 90%;
  overflow: auto;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4);
  border-bottom: 1px solid var(--border);
}

.modal-body {
  padding: var(--space-4);
}

.modal-footer {
  padding: var(--space-4);
  border-top: 1px solid var(--border);
  display: flex;
  justify-content: flex-end;
  align-items: center;
  gap: var(--space-3);
}

.modal-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.modal-buttons {
  display: flex;
  gap: var(--space-3);
}

.confirmation-content {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.confirmation-message {
  color: var(--text-secondary);
}

.btn-close {
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
}

/* Carousel */
.carousel-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
  outline: none;
}

.carousel-backdrop {
  position: absolute;
  inset: 0;
  background-color: var(--carousel-backdrop);
}

.carousel-content {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
  max-width: 90vw;
  max-height: 90vh;
}

.carousel-content img {
  max-width: 80vw;
  max-height: 70vh;
  object-fit: contain;
  border-radius: var(--radius-md);
}

.carousel-caption {
  color: var(--text-inverse);
  text-align: center;
}

.carousel-controls {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  color: var(--text-inverse);
}

.carousel-status {
  color: var(--error);
}
"#;
