// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
// annotating a set of image descriptions and summarising noun
// usage per image.
//
// Rules for this layer:
//   - No counting or median math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layers 4 and 6)
//   - Only workflow coordination

// Per-record tagging and noun counting
pub mod enricher;

// The end-to-end analysis workflow
pub mod analyze_use_case;
