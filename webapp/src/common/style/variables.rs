pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;          /* Find Products button */
  --primary-dark: #2563EB;     /* Button hover */
  --accent: #C026D3;           /* Brand accent (fuchsia) */
  --focus-ring: rgba(59, 130, 246, 0.5);

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-600: #4B5563;
  --neutral-800: #1F2937;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--neutral-800);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-300);
  --border-subtle: var(--neutral-200);

  /* Layout */
  --container-width: 1280px;
  --panel-width: 28rem;

  /* Spacing System */
  --space-2: 8px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
