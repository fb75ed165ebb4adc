/// UI components
///
/// - `card` - selectable product/style cards and remote image rendering
/// - `spinner` - processing indicator drawn on a canvas
/// - `result` - the style transfer result panel
/// - `chrome` - header, technology notes, footer

pub mod card;
pub mod chrome;
pub mod result;
pub mod spinner;
