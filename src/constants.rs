// DOM-side names and sizes used by the browser front-end.

// Element ids
pub const STYLE_ID: &str = "crystal-cursor-styles";
pub const GLYPH_ID: &str = "moonlight-cursor";
pub const PETAL_LAYER_ID: &str = "crystal-petal-layer";

// Class names per visual kind
pub const GLYPH_CLASS: &str = "crystal-glyph";
pub const TRAIL_CLASS: &str = "crystal-trail";
pub const BURST_CLASS: &str = "crystal-burst";
pub const SHOCKWAVE_CLASS: &str = "crystal-shockwave";
pub const PETAL_CLASS: &str = "crystal-petal";

// Glyph state classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const HOVER_CLASS: &str = "hover";

// Elements that switch the glyph to its hover look
pub const HOVER_SELECTOR: &str = "a, button, [data-hover]";

// Media query that reports a pointer without hover
pub const NO_HOVER_QUERY: &str = "(hover: none)";

// Fixed petal box before scaling
pub const PETAL_SIZE_PX: f32 = 20.0;

// Minimal rules to position the effect elements; looks stay inline.
pub const STYLESHEET: &str = r#"
#moonlight-cursor { position: fixed; width: 16px; height: 16px; pointer-events: none; z-index: 9999;
  transform: translate(-50%, -50%); border-radius: 50%; background: rgba(117, 49, 177, 0.2);
  box-shadow: 0 0 8px #6624a0, inset 0 0 5px #6420a0; transition: transform 0.1s ease, opacity 0.3s ease; }
#moonlight-cursor.hidden { opacity: 0; }
#moonlight-cursor.hover { background: rgba(157, 78, 221, 0.3); box-shadow: 0 0 10px #9d4edd, inset 0 0 8px #9d4edd; }
#moonlight-cursor.active { transform: translate(-50%, -50%) scale(0.8); }
.crystal-trail { position: fixed; pointer-events: none; z-index: 9998; border-radius: 50%; will-change: transform, opacity; }
.crystal-burst { position: fixed; pointer-events: none; z-index: 9997; will-change: transform, opacity;
  clip-path: polygon(50% 0%, 0% 100%, 100% 100%); }
.crystal-shockwave { position: fixed; pointer-events: none; z-index: 9996; border-radius: 50%; border-style: solid; }
#crystal-petal-layer { position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;
  z-index: -9999; overflow: hidden; }
.crystal-petal { position: absolute; border-radius: 150% 0 150% 0; will-change: transform, opacity; }
@media (hover: none) { #moonlight-cursor { display: none !important; } }
"#;
