pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Layout */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: none;
  cursor: pointer;
  font-size: 1rem;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn:disabled {
  background-color: var(--neutral-400);
  cursor: not-allowed;
}

/* Form Elements */
.form-select {
  width: 100%;
  padding: var(--space-2);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font-size: 1rem;
}

.form-select:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--focus-ring);
}

/* Cards */
.card {
  display: block;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  overflow: hidden;
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-lg);
  text-decoration: none;
}
"#;
