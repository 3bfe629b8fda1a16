//! PCG64TMWC: two MWC64 engines merged through an XSL-RR output function

mod pcg64tmwc;

pub use pcg64tmwc::{output_xsl_rr, to_unit_double, Pcg64Tmwc};
