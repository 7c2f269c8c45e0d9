//! Embedded color name database.
//!
//! # Responsibilities
//! - Hold the CSS extended color keyword set as a static table
//! - Normalize lookups (trim, ASCII lowercase) before matching
//!
//! # Design Decisions
//! - Table is sorted by name so lookup is a binary search over a static
//!   slice; no allocation, no startup cost
//! - Lookup is case-insensitive; the keyword set itself is all lowercase
//! - `gray`/`grey` spelling pairs are distinct entries with equal values

use crate::resolver::types::{ColorNameResolver, ResolveError, Rgb};

/// In-process resolver backed by the static keyword table.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamedColorTable;

impl NamedColorTable {
    pub fn new() -> Self {
        Self
    }
}

impl ColorNameResolver for NamedColorTable {
    fn resolve(&self, name: &str) -> Result<Rgb, ResolveError> {
        let normalized = name.trim().to_ascii_lowercase();
        match CSS_COLORS.binary_search_by(|probe| probe.0.cmp(&normalized.as_str())) {
            Ok(idx) => Ok(CSS_COLORS[idx].1),
            Err(_) => Err(ResolveError::UnknownName {
                name: name.to_string(),
            }),
        }
    }
}

/// CSS extended color keywords, sorted by name.
static CSS_COLORS: &[(&str, Rgb)] = &[
    ("aliceblue", Rgb::new(0xf0, 0xf8, 0xff)),
    ("antiquewhite", Rgb::new(0xfa, 0xeb, 0xd7)),
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("aquamarine", Rgb::new(0x7f, 0xff, 0xd4)),
    ("azure", Rgb::new(0xf0, 0xff, 0xff)),
    ("beige", Rgb::new(0xf5, 0xf5, 0xdc)),
    ("bisque", Rgb::new(0xff, 0xe4, 0xc4)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("blanchedalmond", Rgb::new(0xff, 0xeb, 0xcd)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("blueviolet", Rgb::new(0x8a, 0x2b, 0xe2)),
    ("brown", Rgb::new(0xa5, 0x2a, 0x2a)),
    ("burlywood", Rgb::new(0xde, 0xb8, 0x87)),
    ("cadetblue", Rgb::new(0x5f, 0x9e, 0xa0)),
    ("chartreuse", Rgb::new(0x7f, 0xff, 0x00)),
    ("chocolate", Rgb::new(0xd2, 0x69, 0x1e)),
    ("coral", Rgb::new(0xff, 0x7f, 0x50)),
    ("cornflowerblue", Rgb::new(0x64, 0x95, 0xed)),
    ("cornsilk", Rgb::new(0xff, 0xf8, 0xdc)),
    ("crimson", Rgb::new(0xdc, 0x14, 0x3c)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("darkblue", Rgb::new(0x00, 0x00, 0x8b)),
    ("darkcyan", Rgb::new(0x00, 0x8b, 0x8b)),
    ("darkgoldenrod", Rgb::new(0xb8, 0x86, 0x0b)),
    ("darkgray", Rgb::new(0xa9, 0xa9, 0xa9)),
    ("darkgreen", Rgb::new(0x00, 0x64, 0x00)),
    ("darkgrey", Rgb::new(0xa9, 0xa9, 0xa9)),
    ("darkkhaki", Rgb::new(0xbd, 0xb7, 0x6b)),
    ("darkmagenta", Rgb::new(0x8b, 0x00, 0x8b)),
    ("darkolivegreen", Rgb::new(0x55, 0x6b, 0x2f)),
    ("darkorange", Rgb::new(0xff, 0x8c, 0x00)),
    ("darkorchid", Rgb::new(0x99, 0x32, 0xcc)),
    ("darkred", Rgb::new(0x8b, 0x00, 0x00)),
    ("darksalmon", Rgb::new(0xe9, 0x96, 0x7a)),
    ("darkseagreen", Rgb::new(0x8f, 0xbc, 0x8f)),
    ("darkslateblue", Rgb::new(0x48, 0x3d, 0x8b)),
    ("darkslategray", Rgb::new(0x2f, 0x4f, 0x4f)),
    ("darkslategrey", Rgb::new(0x2f, 0x4f, 0x4f)),
    ("darkturquoise", Rgb::new(0x00, 0xce, 0xd1)),
    ("darkviolet", Rgb::new(0x94, 0x00, 0xd3)),
    ("deeppink", Rgb::new(0xff, 0x14, 0x93)),
    ("deepskyblue", Rgb::new(0x00, 0xbf, 0xff)),
    ("dimgray", Rgb::new(0x69, 0x69, 0x69)),
    ("dimgrey", Rgb::new(0x69, 0x69, 0x69)),
    ("dodgerblue", Rgb::new(0x1e, 0x90, 0xff)),
    ("firebrick", Rgb::new(0xb2, 0x22, 0x22)),
    ("floralwhite", Rgb::new(0xff, 0xfa, 0xf0)),
    ("forestgreen", Rgb::new(0x22, 0x8b, 0x22)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("gainsboro", Rgb::new(0xdc, 0xdc, 0xdc)),
    ("ghostwhite", Rgb::new(0xf8, 0xf8, 0xff)),
    ("gold", Rgb::new(0xff, 0xd7, 0x00)),
    ("goldenrod", Rgb::new(0xda, 0xa5, 0x20)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("greenyellow", Rgb::new(0xad, 0xff, 0x2f)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("honeydew", Rgb::new(0xf0, 0xff, 0xf0)),
    ("hotpink", Rgb::new(0xff, 0x69, 0xb4)),
    ("indianred", Rgb::new(0xcd, 0x5c, 0x5c)),
    ("indigo", Rgb::new(0x4b, 0x00, 0x82)),
    ("ivory", Rgb::new(0xff, 0xff, 0xf0)),
    ("khaki", Rgb::new(0xf0, 0xe6, 0x8c)),
    ("lavender", Rgb::new(0xe6, 0xe6, 0xfa)),
    ("lavenderblush", Rgb::new(0xff, 0xf0, 0xf5)),
    ("lawngreen", Rgb::new(0x7c, 0xfc, 0x00)),
    ("lemonchiffon", Rgb::new(0xff, 0xfa, 0xcd)),
    ("lightblue", Rgb::new(0xad, 0xd8, 0xe6)),
    ("lightcoral", Rgb::new(0xf0, 0x80, 0x80)),
    ("lightcyan", Rgb::new(0xe0, 0xff, 0xff)),
    ("lightgoldenrodyellow", Rgb::new(0xfa, 0xfa, 0xd2)),
    ("lightgray", Rgb::new(0xd3, 0xd3, 0xd3)),
    ("lightgreen", Rgb::new(0x90, 0xee, 0x90)),
    ("lightgrey", Rgb::new(0xd3, 0xd3, 0xd3)),
    ("lightpink", Rgb::new(0xff, 0xb6, 0xc1)),
    ("lightsalmon", Rgb::new(0xff, 0xa0, 0x7a)),
    ("lightseagreen", Rgb::new(0x20, 0xb2, 0xaa)),
    ("lightskyblue", Rgb::new(0x87, 0xce, 0xfa)),
    ("lightslategray", Rgb::new(0x77, 0x88, 0x99)),
    ("lightslategrey", Rgb::new(0x77, 0x88, 0x99)),
    ("lightsteelblue", Rgb::new(0xb0, 0xc4, 0xde)),
    ("lightyellow", Rgb::new(0xff, 0xff, 0xe0)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("limegreen", Rgb::new(0x32, 0xcd, 0x32)),
    ("linen", Rgb::new(0xfa, 0xf0, 0xe6)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("mediumaquamarine", Rgb::new(0x66, 0xcd, 0xaa)),
    ("mediumblue", Rgb::new(0x00, 0x00, 0xcd)),
    ("mediumorchid", Rgb::new(0xba, 0x55, 0xd3)),
    ("mediumpurple", Rgb::new(0x93, 0x70, 0xdb)),
    ("mediumseagreen", Rgb::new(0x3c, 0xb3, 0x71)),
    ("mediumslateblue", Rgb::new(0x7b, 0x68, 0xee)),
    ("mediumspringgreen", Rgb::new(0x00, 0xfa, 0x9a)),
    ("mediumturquoise", Rgb::new(0x48, 0xd1, 0xcc)),
    ("mediumvioletred", Rgb::new(0xc7, 0x15, 0x85)),
    ("midnightblue", Rgb::new(0x19, 0x19, 0x70)),
    ("mintcream", Rgb::new(0xf5, 0xff, 0xfa)),
    ("mistyrose", Rgb::new(0xff, 0xe4, 0xe1)),
    ("moccasin", Rgb::new(0xff, 0xe4, 0xb5)),
    ("navajowhite", Rgb::new(0xff, 0xde, 0xad)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("oldlace", Rgb::new(0xfd, 0xf5, 0xe6)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("olivedrab", Rgb::new(0x6b, 0x8e, 0x23)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
    ("orangered", Rgb::new(0xff, 0x45, 0x00)),
    ("orchid", Rgb::new(0xda, 0x70, 0xd6)),
    ("palegoldenrod", Rgb::new(0xee, 0xe8, 0xaa)),
    ("palegreen", Rgb::new(0x98, 0xfb, 0x98)),
    ("paleturquoise", Rgb::new(0xaf, 0xee, 0xee)),
    ("palevioletred", Rgb::new(0xdb, 0x70, 0x93)),
    ("papayawhip", Rgb::new(0xff, 0xef, 0xd5)),
    ("peachpuff", Rgb::new(0xff, 0xda, 0xb9)),
    ("peru", Rgb::new(0xcd, 0x85, 0x3f)),
    ("pink", Rgb::new(0xff, 0xc0, 0xcb)),
    ("plum", Rgb::new(0xdd, 0xa0, 0xdd)),
    ("powderblue", Rgb::new(0xb0, 0xe0, 0xe6)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("rebeccapurple", Rgb::new(0x66, 0x33, 0x99)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("rosybrown", Rgb::new(0xbc, 0x8f, 0x8f)),
    ("royalblue", Rgb::new(0x41, 0x69, 0xe1)),
    ("saddlebrown", Rgb::new(0x8b, 0x45, 0x13)),
    ("salmon", Rgb::new(0xfa, 0x80, 0x72)),
    ("sandybrown", Rgb::new(0xf4, 0xa4, 0x60)),
    ("seagreen", Rgb::new(0x2e, 0x8b, 0x57)),
    ("seashell", Rgb::new(0xff, 0xf5, 0xee)),
    ("sienna", Rgb::new(0xa0, 0x52, 0x2d)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("skyblue", Rgb::new(0x87, 0xce, 0xeb)),
    ("slateblue", Rgb::new(0x6a, 0x5a, 0xcd)),
    ("slategray", Rgb::new(0x70, 0x80, 0x90)),
    ("slategrey", Rgb::new(0x70, 0x80, 0x90)),
    ("snow", Rgb::new(0xff, 0xfa, 0xfa)),
    ("springgreen", Rgb::new(0x00, 0xff, 0x7f)),
    ("steelblue", Rgb::new(0x46, 0x82, 0xb4)),
    ("tan", Rgb::new(0xd2, 0xb4, 0x8c)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("thistle", Rgb::new(0xd8, 0xbf, 0xd8)),
    ("tomato", Rgb::new(0xff, 0x63, 0x47)),
    ("turquoise", Rgb::new(0x40, 0xe0, 0xd0)),
    ("violet", Rgb::new(0xee, 0x82, 0xee)),
    ("wheat", Rgb::new(0xf5, 0xde, 0xb3)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("whitesmoke", Rgb::new(0xf5, 0xf5, 0xf5)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("yellowgreen", Rgb::new(0x9a, 0xcd, 0x32)),
];
