use crate::alphabet::GAP;

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

/// Remove every gap symbol from an aligned sequence.
pub fn strip_gaps(aligned: &str) -> String {
    aligned.chars().filter(|&c| c != char::from(GAP)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_gaps() {
        assert_eq!(strip_gaps("AC_G__T"), "ACGT");
        assert_eq!(strip_gaps("____"), "");
        assert_eq!(strip_gaps(""), "");
    }
}
