pub const LANDING_STYLES: &str = r#"
/* Landing Page Styles */

.landing {
  min-height: 100vh;
  background-color: var(--background);
}

/* Header */
.site-header {
  background-color: var(--surface);
  padding: var(--space-12) 0;
  box-shadow: var(--shadow-sm);
  text-align: center;
}

.site-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.site-title a {
  color: inherit;
}

.site-title a:hover {
  text-decoration: none;
}

.brand-accent {
  color: var(--accent);
}

.site-tagline {
  font-size: 1.125rem;
  color: var(--text-secondary);
}

/* Selector panel */
.selector-section {
  padding: var(--space-8) 0;
}

.selector-panel {
  max-width: var(--panel-width);
  margin: 0 auto;
  background-color: var(--surface);
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
}

.selector-panel h2 {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.selector-controls {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

/* Category grid */
.explore-section {
  padding: var(--space-12) 0;
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
  text-align: center;
  color: var(--text-primary);
  margin-bottom: var(--space-8);
}

.skin-type-grid {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: var(--space-6);
}

@media (min-width: 640px) {
  .skin-type-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (min-width: 1024px) {
  .skin-type-grid {
    grid-template-columns: repeat(4, minmax(0, 1fr));
  }
}

.skin-type-card {
  text-align: center;
  padding: var(--space-6);
}

.skin-type-emoji {
  font-size: 3.75rem;
  margin-bottom: var(--space-4);
}

.skin-type-name {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.skin-type-description {
  color: var(--text-secondary);
}

/* Footer */
.site-footer {
  background-color: var(--surface);
  padding: var(--space-6) 0;
  margin-top: var(--space-12);
  border-top: 1px solid var(--border-subtle);
  text-align: center;
  color: var(--text-secondary);
}

/* Destination and fallback pages */
.message-panel {
  max-width: var(--panel-width);
  margin: var(--space-12) auto 0;
  text-align: center;
}

.message-panel p {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}
"#;
