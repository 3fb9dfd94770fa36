use std::io::{self, Write};

use crate::data::model::Peak;

/// Write the peak count on one line, then each peak index on its own line.
pub fn write_report<W: Write>(out: &mut W, peaks: &[Peak]) -> io::Result<()> {
    writeln!(out, "{}", peaks.len())?;
    for peak in peaks {
        writeln!(out, "{}", peak.index)?;
    }
    out.flush()
}

/// Annotation text for a peak: the literal `(index, value)` pair.
pub fn peak_label(peak: &Peak) -> String {
    peak.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_then_indices() {
        let peaks = [
            Peak {
                index: 1,
                value: 300_000.0,
            },
            Peak {
                index: 4,
                value: 300_000.0,
            },
        ];
        let mut buf = Vec::new();
        write_report(&mut buf, &peaks).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2\n1\n4\n");
    }

    #[test]
    fn empty_report_is_just_zero() {
        let mut buf = Vec::new();
        write_report(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\n");
    }

    #[test]
    fn label_shows_index_and_value() {
        let peak = Peak {
            index: 1,
            value: 300_000.0,
        };
        assert_eq!(peak_label(&peak), "(1, 300000.0)");
        let peak = Peak {
            index: 17,
            value: 212_345.75,
        };
        assert_eq!(peak_label(&peak), "(17, 212345.75)");
    }
}
