//! Global CSS styles for the collectives app.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #ffffff;
  --surface: #f7f8fa;
  --border: #dcdee0;

  --text-primary: #313233;
  --text-secondary: #6e747a;
  --text-muted: #9d9fa3;

  --primary: #3385ff;
  --primary-dark: #1869f5;
  --success: #51e094;
  --danger: #e03f6a;

  --font-sans: 'Inter', -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;

  --radius: 8px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
}

a { color: var(--primary); text-decoration: none; }
a:hover { color: var(--primary-dark); }

/* === Page Frame === */
.page { display: flex; flex-direction: column; min-height: 100vh; }

.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--border);
}

.brand { font-weight: 700; font-size: var(--text-lg); color: var(--text-primary); }

.page-content {
  flex: 1;
  width: 100%;
  max-width: 1080px;
  margin: 0 auto;
  padding: 2rem;
}

.page-footer {
  padding: 1.5rem 2rem;
  border-top: 1px solid var(--border);
  color: var(--text-muted);
  font-size: var(--text-sm);
  text-align: center;
}

.page-nav { display: flex; gap: 1rem; }
.nav-link { color: var(--text-secondary); font-weight: 500; }

.h1 { font-size: var(--text-xl); font-weight: 700; }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--background);
  color: var(--text-primary);
  font: inherit;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn:hover:not(:disabled) { background: var(--surface); }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--primary); border-color: var(--primary); color: #ffffff; }
.btn-primary:hover:not(:disabled) { background: var(--primary-dark); }
.btn-ghost { border-color: transparent; background: transparent; }
.btn-large { padding: 0.75rem 1.5rem; font-size: var(--text-lg); }

.styled-link { font-weight: 500; }
.styled-link-primary {
  display: inline-block;
  padding: 0.5rem 1.25rem;
  border-radius: 100px;
  background: var(--primary);
  color: #ffffff;
}
.styled-link-primary:hover { background: var(--primary-dark); color: #ffffff; }

/* === Search === */
.search-form { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2rem; }
.search-row { display: flex; gap: 0.5rem; }

.search-input {
  flex: 1;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font: inherit;
}

.search-button { white-space: nowrap; }

.search-input:focus { outline: 2px solid var(--primary); outline-offset: -1px; }

.results { display: flex; flex-direction: column; gap: 2rem; }
.results--empty, .results-footer { align-items: center; text-align: center; gap: 1rem; }
.results-footer { display: flex; flex-direction: column; color: var(--text-secondary); }

.results-grid, .loading-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
}

.loading-card {
  height: 320px;
  border-radius: var(--radius);
  background: linear-gradient(90deg, var(--surface), var(--border), var(--surface));
  background-size: 200% 100%;
  animation: shimmer 1.5s infinite;
}

@keyframes shimmer {
  from { background-position: 200% 0; }
  to { background-position: -200% 0; }
}

/* === Collective Card === */
.collective-card {
  display: flex;
  flex-direction: column;
  height: 100%;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  color: var(--text-primary);
}

.collective-card:hover { box-shadow: 0 4px 14px rgba(0, 0, 0, 0.08); color: var(--text-primary); }

.collective-card__banner {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100px;
  background: var(--surface);
}

.collective-card__avatar { width: 64px; height: 64px; border-radius: 12px; object-fit: cover; }

.collective-card__avatar--initial {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--primary);
  color: #ffffff;
  font-size: var(--text-xl);
  font-weight: 700;
}

.collective-card__body { flex: 1; padding: 1rem; }
.collective-card__name { font-size: var(--text-base); margin-bottom: 0.5rem; }

.collective-card__description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  overflow: hidden;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
}

.collective-card__stats { display: flex; border-top: 1px solid var(--border); }
.collective-card__stat { flex: 1; display: flex; flex-direction: column; padding: 0.75rem 1rem; }
.stat-value { font-weight: 700; }
.stat-label { color: var(--text-muted); font-size: var(--text-xs); text-transform: uppercase; }

/* === Pagination === */
.pagination { display: flex; align-items: center; justify-content: center; flex-wrap: wrap; gap: 0.25rem; }

.pagination__page, .pagination__step {
  min-width: 2.25rem;
  padding: 0.4rem 0.6rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--background);
  font: inherit;
  cursor: pointer;
}

.pagination__page.active { background: var(--primary); border-color: var(--primary); color: #ffffff; }
.pagination__step:disabled { opacity: 0.4; cursor: not-allowed; }
.pagination__summary { width: 100%; text-align: center; color: var(--text-muted); font-size: var(--text-sm); }

/* === Error / Not Found === */
.error-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 2rem;
  text-align: center;
}

.error-title { font-size: var(--text-xl); }
.error-message { color: var(--danger); }

/* === Gift Cards === */
.gift-cards-success {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding: 3rem 1rem;
  text-align: center;
}

.gift-cards-success__icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  background: var(--success);
  color: #ffffff;
  font-size: var(--text-xl);
}

.gift-cards-success__message { font-size: var(--text-lg); font-weight: 500; }
.gift-cards-success__actions { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; }

.result-redeem-links {
  width: 100%;
  max-width: 640px;
  padding: 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font-family: 'SF Mono', 'Consolas', monospace;
  font-size: var(--text-sm);
  resize: vertical;
}
"#;

/// Styles for the embeddable memberships page, which renders without the
/// page frame.
pub const IFRAME_STYLES: &str = r#"
body { background: transparent; overflow: hidden; }

.iframe-container { padding: 0.25rem; }
.iframe-container h2 { font-size: var(--text-base); margin-bottom: 0.5rem; }

.memberships { display: flex; flex-direction: column; gap: 0.5rem; list-style: none; }

.membership {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.membership__link { display: flex; flex: 1; align-items: center; gap: 0.5rem; color: var(--text-primary); }
.membership__logo { width: 32px; height: 32px; border-radius: 6px; object-fit: cover; }
.membership__name { font-weight: 500; }
.membership__role, .membership__donated { color: var(--text-secondary); font-size: var(--text-sm); }
.memberships-empty, .memberships-loading { color: var(--text-muted); font-size: var(--text-sm); }
"#;
