//! Inline stylesheet and scripts shared by every page

/// Stylesheet embedded in every page
pub const DASHBOARD_CSS: &str = r"
:root {
    --bg: #0f172a;
    --panel: #1e293b;
    --border: #475569;
    --text: #e2e8f0;
    --muted: #94a3b8;
    --accent: #f472b6;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: system-ui, -apple-system, sans-serif;
}

a { color: inherit; }

.navbar {
    height: 2.5rem;
    width: 100%;
    background: rgba(51, 65, 85, 0.5);
}

.navbar ul {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 2.5rem;
    margin: 0;
    padding: 0.5rem;
    list-style: none;
}

.content {
    display: grid;
    gap: 0.5rem;
    padding: 1rem;
}

.panel {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem 2.5rem;
    border: 2px solid var(--border);
    border-radius: 0.375rem;
    background: var(--panel);
}

.panel h2 { margin: 0; font-size: 1.5rem; }
.panel h2.centered { text-align: center; }

.counter-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    font-size: 0.875rem;
}

.counter-grid.links { grid-template-columns: repeat(4, 1fr); }

.counter-card { text-decoration: none; }

.counter {
    margin: 0;
    min-height: 3rem;
    font-size: 3rem;
    line-height: 1;
}

table { border-collapse: collapse; text-align: center; }
th, td { padding: 0.25rem 0.5rem; }
.issues-table th, .issues-table td { padding: 0.25rem 1.25rem; }

.page-title { text-align: center; font-size: 1.5rem; }

.chart-container { position: relative; width: 100%; }

.fetch-failed, .loading { text-align: center; color: var(--muted); }

.spinner {
    width: 2rem;
    height: 2rem;
    margin: 1rem auto;
    border: 3px solid var(--border);
    border-top-color: var(--accent);
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.not-found { text-align: center; }
";

/// Draws every `canvas[data-chart]` with Chart.js
pub const CHART_BOOTSTRAP_JS: &str = r"
document.querySelectorAll('canvas[data-chart]').forEach(function (canvas) {
    new Chart(canvas, JSON.parse(canvas.dataset.chart));
});
";
