//! Global CSS styles for the Postsheet preview.
//!
//! Decorative styling only: slot widths, badge diameters, and the grid gap
//! are inline styles owned by the components themselves.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --sheet-surface: #ffffff;
  --canvas: #eef1f4;

  /* BADGE */
  --badge-fill: #eef3f8;

  /* INK */
  --icon-ink: #56687a;
  --label-ink: #5b5f66;

  /* CHROME */
  --handle-grey: #d9dde2;
  --indicator-ink: #22262b;

  /* Shape */
  --sheet-radius: 20px;

  /* Typography */
  --font-ui: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-ui);
  background: var(--canvas);
  -webkit-font-smoothing: antialiased;
}

/* === Composer Screen === */
/* The fixed canvas the export targets; the sheet is anchored to its top
   edge and the home indicator to its bottom. */
.composer-screen {
  position: relative;
  width: 390px;
  height: 844px;
  margin: 0 auto;
  background: var(--canvas);
  overflow: hidden;
}

.composer-screen .sheet {
  position: absolute;
  top: 0;
  left: 0;
}

/* === Sheet === */
.sheet {
  width: 390px;
  height: 232px;
  background: var(--sheet-surface);
  border-radius: var(--sheet-radius) var(--sheet-radius) 0 0;
  box-shadow: 0 2px 16px rgba(34, 38, 43, 0.08);
}

.sheet-content {
  padding: 0 24px 24px;
}

/* === Drag Handle === */
.drag-handle {
  width: 40px;
  height: 4px;
  border-radius: 2px;
  background: var(--handle-grey);
  margin: 10px auto 14px;
}

/* === Tile Grid === */
.tile-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
}

/* === Tiles === */
.tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 8px;
}

/* Invisible tiles keep their slot; only the paint is suppressed. */
.tile--hidden {
  opacity: 0;
}

.tile-label {
  font-size: 12px;
  line-height: 1.2;
  color: var(--label-ink);
  text-align: center;
}

/* === Icon Badge === */
.icon-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--badge-fill);
  color: var(--icon-ink);
}

.glyph-placeholder {
  opacity: 0.45;
}

/* === Home Indicator === */
.home-indicator {
  position: absolute;
  bottom: 8px;
  left: 50%;
  transform: translateX(-50%);
  width: 134px;
  height: 5px;
  border-radius: 100px;
  background: var(--indicator-ink);
}
"#;
