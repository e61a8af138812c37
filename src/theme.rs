//! Global Styles
//!
//! One CSS constant injected by the App component.

pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #f4f7fb;
  --panel: #ffffff;
  --border: #d6dde6;
  --text: #1c2733;
  --text-muted: #5b6678;
  --accent: #2563eb;
  --accent-hover: #1d4ed8;
  --positive: #16a34a;
  --positive-hover: #15803d;
  --negative: #e11d48;
  --chart-fill: rgba(75, 192, 192, 0.35);
  --chart-stroke: rgba(75, 192, 192, 1);
  --radius: 6px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: system-ui, -apple-system, sans-serif;
}

.page {
  max-width: 760px;
  margin: 0 auto;
  padding: 24px;
}

h1 { font-size: 1.9rem; margin: 16px 0; }
h2 { font-size: 1.4rem; margin: 20px 0 12px; }

input[type="text"], input[type="password"] {
  width: 100%;
  padding: 8px;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  margin-bottom: 12px;
}

button {
  padding: 8px 14px;
  border: none;
  border-radius: var(--radius);
  background: var(--panel);
  cursor: pointer;
}

button.primary {
  background: var(--accent);
  color: #fff;
}
button.primary:hover { background: var(--accent-hover); }
button:disabled { opacity: 0.6; cursor: default; }

.vote-btn {
  background: var(--positive);
  color: #fff;
}
.vote-btn:hover { background: var(--positive-hover); }

/* Login */
.login-layout {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100vh;
}
.login-card { text-align: center; }
.brand {
  color: var(--accent);
  font-size: 2.2rem;
  margin-bottom: 24px;
}
.login-form {
  background: var(--panel);
  padding: 24px;
  border-radius: var(--radius);
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.08);
  width: 320px;
  text-align: left;
}
.login-form label { display: block; color: var(--text-muted); margin-bottom: 4px; }
.login-form button { width: 100%; }
.form-error { color: var(--negative); margin: 0 0 12px; }

/* Page tabs */
.page-tab-bar {
  display: flex;
  gap: 4px;
  border-bottom: 1px solid var(--border);
  padding-bottom: 4px;
}
.page-tab { color: var(--text-muted); }
.page-tab.active {
  background: var(--accent);
  color: #fff;
}
.page-tab.logout { margin-left: auto; }

/* Quotes */
.random-row { margin: 12px 0; }
.random-card {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 16px;
  margin-bottom: 12px;
}
.add-form { margin-bottom: 8px; }
.search-sort-bar { margin: 24px 0; }
.quote-list { list-style: disc; padding-left: 24px; }
.quote-row { margin-bottom: 10px; }
.votes { color: var(--text-muted); margin: 4px 0; }
.loading { color: var(--text-muted); }
.item-count { color: var(--text-muted); font-size: 0.85rem; margin-top: 16px; }

/* Show List */
.card-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 12px;
  margin: 16px 0;
}
.card {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 16px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
}
.card h2 { margin: 0 0 6px; }

/* Chart */
.bar-chart {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 12px;
  margin: 24px 0;
}
.chart-title { margin: 0 0 8px; color: var(--text-muted); }
.bar-chart svg { width: 100%; height: auto; }
.chart-bar {
  fill: var(--chart-fill);
  stroke: var(--chart-stroke);
  stroke-width: 1;
}
.chart-value { font-size: 12px; fill: var(--text); text-anchor: middle; }
.chart-label { font-size: 11px; fill: var(--text-muted); text-anchor: middle; }
"#;
