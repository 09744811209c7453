//! Global CSS styles for Tipjar.
//!
//! Warm paper surfaces, ink text, one burnt-orange accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --paper: #fbf8f3;
  --paper-raised: #ffffff;
  --paper-sunk: #f1ece4;
  --line: #e4ddd2;

  /* INK */
  --ink: #1f1a14;
  --ink-soft: #5c544a;
  --ink-muted: #8d857a;

  /* ACCENT */
  --accent: #c2410c;
  --accent-soft: #fde8dc;

  /* SEMANTIC */
  --good: #15803d;
  --good-soft: #dcf5e4;
  --fair: #b45309;
  --fair-soft: #fdf0d5;
  --poor: #b91c1c;
  --poor-soft: #fde2e2;
  --info: #1d4ed8;
  --info-soft: #e0e9ff;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;

  --radius: 12px;
  --radius-sm: 8px;
  --shadow: 0 1px 2px rgba(31, 26, 20, 0.06), 0 4px 12px rgba(31, 26, 20, 0.06);

  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.5;
  min-height: 100vh;
}

button {
  font: inherit;
  color: inherit;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

.mono {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

/* === Shell & Navigation === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  background: var(--paper-raised);
  border-bottom: 1px solid var(--line);
}

.app-title {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--accent);
}

.nav-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  display: flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.4rem 0.6rem;
  border-radius: var(--radius-sm);
  color: var(--ink-soft);
  text-decoration: none;
  font-size: var(--text-sm);
  transition: background var(--transition-fast);
}

.nav-link:hover { background: var(--paper-sunk); }
.nav-link.active { color: var(--accent); background: var(--accent-soft); }
.nav-link-icon { display: flex; }

.screen {
  flex: 1;
  padding: 1rem;
}

/* === Page layout === */
.page {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 640px;
  margin: 0 auto;
  padding-bottom: 5rem;
}

.page-head {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  gap: 1rem;
}

.page-title { font-size: var(--text-xl); font-weight: 700; }
.page-subtitle { color: var(--ink-soft); font-size: var(--text-sm); }

.section-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  margin-bottom: 0.5rem;
}

.section-title { font-size: var(--text-base); font-weight: 600; }
.section-label {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--ink-muted);
  margin-bottom: 0.4rem;
}

.toolbar, .filter-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.5rem;
}

.toolbar .search-input-wrapper { flex: 1; }

.filter-bar {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-danger, .btn-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  border-radius: var(--radius-sm);
  padding: 0.5rem 0.9rem;
  font-size: var(--text-sm);
  font-weight: 600;
  border: 1px solid transparent;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover:not(:disabled) { background: #9a3412; }
.btn-ghost { background: transparent; border-color: var(--line); }
.btn-ghost:hover:not(:disabled) { background: var(--paper-sunk); }
.btn-danger { background: var(--poor-soft); color: var(--poor); }
.btn-danger:hover:not(:disabled) { background: #fbcaca; }
.btn-chip {
  padding: 0.25rem 0.6rem;
  border-radius: 999px;
  background: var(--paper-sunk);
  font-weight: 500;
}

.btn-spinner {
  display: inline-block;
  animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  font-size: var(--text-lg);
}

.icon-btn:hover { background: var(--paper-sunk); }
.favorite-star { color: var(--ink-muted); }
.favorite-star.on { color: #d97706; }

/* === Pills === */
.pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.35rem;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.3rem 0.75rem;
  border-radius: 999px;
  border: 1px solid var(--line);
  background: var(--paper-raised);
  font-size: var(--text-sm);
}

.pill.selected {
  border-color: var(--accent);
  background: var(--accent-soft);
  color: var(--accent);
}

.pill-count {
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

/* === Inputs === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  position: relative;
}

.input-label { font-size: var(--text-sm); font-weight: 500; }
.input-hint { color: var(--ink-muted); font-weight: 400; }

.input-field {
  width: 100%;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--line);
  border-radius: var(--radius-sm);
  background: var(--paper-raised);
  font: inherit;
  color: var(--ink);
}

.input-field:focus { outline: 2px solid var(--accent-soft); border-color: var(--accent); }
.input-field.invalid { border-color: var(--poor); }
.textarea { resize: vertical; }
.input-error { color: var(--poor); font-size: var(--text-sm); }
.input-counter {
  align-self: flex-end;
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

.category-select, .venue-select { width: auto; min-width: 10rem; }

.search-input-wrapper {
  position: relative;
  display: flex;
  align-items: center;
}

.search-icon {
  position: absolute;
  left: 0.65rem;
  font-size: var(--text-sm);
  opacity: 0.6;
}

.search-input { padding-left: 2rem; padding-right: 2rem; }

.search-clear {
  position: absolute;
  right: 0.4rem;
  border: none;
  background: transparent;
  font-size: var(--text-lg);
  color: var(--ink-muted);
}

.time-range {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
  margin-top: 0.6rem;
}

/* === Switch === */
.switch-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.6rem 0;
}

.switch-text { display: flex; flex-direction: column; }
.switch-label { font-size: var(--text-sm); font-weight: 500; }
.switch-description { font-size: var(--text-xs); color: var(--ink-muted); }

.switch {
  position: relative;
  flex-shrink: 0;
  width: 2.6rem;
  height: 1.5rem;
  border: none;
  border-radius: 999px;
  background: var(--line);
  transition: background var(--transition-fast);
}

.switch.on { background: var(--good); }

.switch-thumb {
  position: absolute;
  top: 0.15rem;
  left: 0.15rem;
  width: 1.2rem;
  height: 1.2rem;
  border-radius: 50%;
  background: #fff;
  box-shadow: var(--shadow);
  transition: transform var(--transition-fast);
}

.switch.on .switch-thumb { transform: translateX(1.1rem); }

/* === Sheet / Drawer === */
.sheet-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  background: rgba(31, 26, 20, 0.35);
}

.sheet {
  display: flex;
  flex-direction: column;
  background: var(--paper-raised);
  box-shadow: var(--shadow);
  max-height: 100vh;
}

.sheet-bottom {
  margin-top: auto;
  width: 100%;
  max-height: 85vh;
  border-radius: var(--radius) var(--radius) 0 0;
}

.sheet-right {
  margin-left: auto;
  width: min(420px, 100%);
  height: 100vh;
}

.sheet-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 1rem 0.5rem;
}

.sheet-title { font-size: var(--text-lg); font-weight: 700; }
.sheet-subtitle { font-size: var(--text-sm); color: var(--ink-soft); }

.sheet-body {
  flex: 1;
  overflow-y: auto;
  padding: 0.5rem 1rem 1rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.sheet-footer {
  display: flex;
  flex-wrap: wrap;
  justify-content: flex-end;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  border-top: 1px solid var(--line);
}

.policy-preview {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  background: var(--paper-sunk);
  border-radius: var(--radius-sm);
  padding: 0.6rem 0.75rem;
}

/* === Toast & banners === */
.toast {
  position: fixed;
  left: 50%;
  bottom: 1.25rem;
  transform: translateX(-50%);
  z-index: 100;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  max-width: calc(100% - 2rem);
  padding: 0.65rem 0.9rem;
  border-radius: var(--radius-sm);
  box-shadow: var(--shadow);
  font-size: var(--text-sm);
}

.toast-info { background: var(--ink); color: var(--paper); }
.toast-success { background: var(--good); color: #fff; }
.toast-warn { background: var(--fair); color: #fff; }
.toast-error { background: var(--poor); color: #fff; }

.toast-close {
  border: none;
  background: transparent;
  font-size: var(--text-lg);
  line-height: 1;
}

.error-banner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.7rem 0.9rem;
  border-radius: var(--radius-sm);
  background: var(--poor-soft);
  color: var(--poor);
  font-size: var(--text-sm);
}

.error-actions { display: flex; gap: 0.5rem; }

.error-retry, .error-dismiss {
  border: none;
  background: transparent;
  font-weight: 600;
  color: inherit;
}

.error-retry { text-decoration: underline; }

.empty-state {
  padding: 2rem 1rem;
  text-align: center;
  color: var(--ink-soft);
}

.empty-title { font-weight: 600; }
.empty-hint { font-size: var(--text-sm); color: var(--ink-muted); }

/* === Score meter & stats === */
.score-meter {
  padding: 0.9rem 1rem;
  border-radius: var(--radius);
  background: var(--paper-raised);
  box-shadow: var(--shadow);
}

.score-head, .score-foot {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
}

.score-title { font-weight: 600; }
.score-value { font-size: var(--text-xl); font-weight: 700; }

.score-track {
  height: 0.5rem;
  margin: 0.5rem 0;
  border-radius: 999px;
  background: var(--paper-sunk);
  overflow: hidden;
}

.score-fill {
  height: 100%;
  border-radius: inherit;
  transition: width var(--transition-normal);
}

.score-good .score-fill { background: var(--good); }
.score-good .score-label { color: var(--good); }
.score-fair .score-fill { background: var(--fair); }
.score-fair .score-label { color: var(--fair); }
.score-poor .score-fill { background: var(--poor); }
.score-poor .score-label { color: var(--poor); }

.score-label { font-weight: 600; font-size: var(--text-sm); }
.score-caption { font-size: var(--text-xs); color: var(--ink-muted); }

.stat-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(96px, 1fr));
  gap: 0.5rem;
}

.stat-tile {
  display: flex;
  flex-direction: column;
  padding: 0.6rem 0.75rem;
  border-radius: var(--radius-sm);
  background: var(--paper-raised);
  border: 1px solid var(--line);
}

.stat-value { font-weight: 700; }
.stat-label { font-size: var(--text-xs); color: var(--ink-muted); }
.stat-tile.warn .stat-value { color: var(--fair); }
.stat-tile.good .stat-value { color: var(--good); }

/* === Badges & chips === */
.badge {
  display: inline-block;
  padding: 0.15rem 0.5rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
  background: var(--paper-sunk);
  color: var(--ink-soft);
}

.badge-current { background: var(--info-soft); color: var(--info); }
.badge-warn { background: var(--fair-soft); color: var(--fair); }
.badge-good { background: var(--good-soft); color: var(--good); }

.rule-chip {
  align-self: flex-start;
  padding: 0.15rem 0.55rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 500;
}

.chip-neutral { background: var(--paper-sunk); color: var(--ink-soft); }
.chip-allow { background: var(--good-soft); color: var(--good); }
.chip-deny { background: var(--poor-soft); color: var(--poor); }

.status-chip {
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
}

.status-completed { background: var(--good-soft); color: var(--good); }
.status-pending { background: var(--fair-soft); color: var(--fair); }
.status-refunded { background: var(--info-soft); color: var(--info); }
.status-failed { background: var(--poor-soft); color: var(--poor); }

/* === Reminders === */
.venue-list, .tip-list, .device-list, .settings-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.venue-row {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
  padding: 0.75rem;
  border-radius: var(--radius);
  background: var(--paper-raised);
  border: 1px solid var(--line);
}

.venue-main {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.2rem;
  min-width: 0;
}

.venue-head { display: flex; align-items: baseline; gap: 0.5rem; }
.venue-name { font-weight: 600; }
.venue-category { font-size: var(--text-xs); color: var(--ink-muted); }
.venue-meta { font-size: var(--text-xs); color: var(--ink-soft); }
.venue-note { font-size: var(--text-sm); font-style: italic; color: var(--ink-soft); }

.venue-actions {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: 0.4rem;
}

.rule-picker {
  display: flex;
  border: 1px solid var(--line);
  border-radius: var(--radius-sm);
  overflow: hidden;
}

.rule-option {
  border: none;
  background: transparent;
  padding: 0.25rem 0.55rem;
  font-size: var(--text-xs);
}

.rule-option + .rule-option { border-left: 1px solid var(--line); }
.rule-option.selected { background: var(--accent-soft); color: var(--accent); font-weight: 600; }

/* === Security === */
.device-card {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  padding: 0.75rem 0.9rem;
  border-radius: var(--radius);
  background: var(--paper-raised);
  border: 1px solid var(--line);
}

.device-card.current { border-color: var(--info); }
.device-card.untrusted { border-color: var(--fair); }
.device-head { display: flex; align-items: center; gap: 0.6rem; }
.device-icon { font-size: var(--text-xl); }
.device-titles { flex: 1; display: flex; flex-direction: column; }
.device-name { font-weight: 600; }
.device-meta { font-size: var(--text-xs); color: var(--ink-soft); }
.device-actions { display: flex; justify-content: flex-end; }

.settings-list {
  padding: 0.75rem 1rem;
  border-radius: var(--radius);
  background: var(--paper-raised);
  border: 1px solid var(--line);
  gap: 0;
}

.event-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  border-left: 2px solid var(--line);
  margin-left: 0.4rem;
}

.event-item {
  position: relative;
  padding: 0.5rem 0 0.5rem 1rem;
}

.event-item::before {
  content: '';
  position: absolute;
  left: -0.4rem;
  top: 0.85rem;
  width: 0.7rem;
  height: 0.7rem;
  border-radius: 50%;
  background: var(--info);
}

.event-warn::before { background: var(--fair); }
.event-head { display: flex; justify-content: space-between; gap: 0.5rem; }
.event-title { font-weight: 600; font-size: var(--text-sm); }
.event-time { font-size: var(--text-xs); color: var(--ink-muted); }
.event-detail { font-size: var(--text-sm); color: var(--ink-soft); }

/* === Receipt === */
.receipt-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.25rem;
  border-radius: var(--radius);
  background: var(--paper-raised);
  box-shadow: var(--shadow);
}

.receipt-head {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.receipt-venue { font-weight: 700; font-size: var(--text-lg); }
.receipt-pro { color: var(--ink-soft); font-size: var(--text-sm); }
.receipt-total { font-size: 2rem; font-weight: 800; margin-top: 0.5rem; }
.receipt-date { font-size: var(--text-xs); color: var(--ink-muted); }

.receipt-lines {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  border-top: 1px dashed var(--line);
  padding-top: 0.75rem;
}

.receipt-line {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
}

.receipt-line dt { color: var(--ink-soft); }
.receipt-line.tip dd { color: var(--accent); font-weight: 600; }
.receipt-line.total {
  border-top: 1px solid var(--line);
  padding-top: 0.35rem;
  font-weight: 700;
}

.receipt-message {
  padding: 0.75rem;
  border-radius: var(--radius-sm);
  background: var(--paper-sunk);
}

.message-visible { font-style: italic; }
.message-hidden { font-size: var(--text-sm); color: var(--ink-muted); }

.receipt-foot {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.receipt-verify { display: flex; flex-direction: column; gap: 0.25rem; }
.signature { color: var(--ink-muted); font-size: var(--text-xs); }
.receipt-qr { width: 112px; height: 112px; }
.qr-error { font-size: var(--text-xs); color: var(--poor); }

.share-actions { display: flex; gap: 0.5rem; }
.manual-copy { display: flex; flex-direction: column; gap: 0.3rem; }

.privacy-panel {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  padding: 1rem;
  border-radius: var(--radius);
  background: var(--paper-raised);
  border: 1px solid var(--line);
}

.privacy-hint { font-size: var(--text-sm); color: var(--ink-soft); }

/* === Wallet === */
.tip-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  width: 100%;
  padding: 0.7rem 0.9rem;
  text-align: left;
  border: 1px solid var(--line);
  border-radius: var(--radius);
  background: var(--paper-raised);
  transition: border-color var(--transition-fast);
}

.tip-row:hover { border-color: var(--accent); }
.tip-main { display: flex; flex-direction: column; min-width: 0; }
.tip-pro { font-weight: 600; }
.tip-meta { font-size: var(--text-xs); color: var(--ink-soft); }
.tip-side { display: flex; flex-direction: column; align-items: flex-end; gap: 0.2rem; }
.tip-amount { font-weight: 700; }
.tip-note { font-style: italic; color: var(--ink-soft); }
"#;
