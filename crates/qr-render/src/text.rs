use qr_gen::QrSymbol;
use std::fmt::Write;

/// Renders a symbol as console art, two characters per module.
///
/// Light modules (and the quiet zone) print as full blocks and dark
/// modules as spaces, which reads correctly on the usual dark terminal.
pub fn to_console_string(qr: &QrSymbol, border: i32) -> String {
    let mut out = String::new();
    for y in -border..qr.size() + border {
        for x in -border..qr.size() + border {
            out.push_str(if qr.module(x, y) { "  " } else { "██" });
        }
        out.push('\n');
    }
    out
}

/// Renders a symbol as an SVG document string with the given quiet zone
/// width in modules. Each dark module becomes a 1x1 path cell; the
/// viewBox spans the symbol plus the border on every side.
pub fn to_svg_string(qr: &QrSymbol, border: i32) -> String {
    let dimension = qr.size() + border * 2;
    let mut cells = String::new();
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            if qr.module(x, y) {
                if !cells.is_empty() {
                    cells.push(' ');
                }
                write!(cells, "M{},{}h1v1h-1z", x + border, y + border)
                    .expect("string formatting is infallible");
            }
        }
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {dimension} {dimension}\" stroke=\"none\">\n\
         \t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n\
         \t<path d=\"{cells}\" fill=\"#000000\"/>\n\
         </svg>\n"
    )
}
