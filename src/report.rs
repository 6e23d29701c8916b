//! Result formatting
//!
//! Presentation layer for the benchmark: renders one block per method, in
//! the order the bench produced them, with timings in milliseconds.

use crate::bench::SolveResult;
use std::io::{self, Write};

/// Write the benchmark report to any writer.
///
/// Two lines per method: the timing line, then the solution vector.
pub fn write_report<W: Write>(w: &mut W, results: &[SolveResult]) -> io::Result<()> {
    for result in results {
        writeln!(
            w,
            "time of {} is {:.3} ms (relative residual {:.3e})",
            result.method, result.elapsed_ms, result.residual
        )?;
        writeln!(w, "x = {}", format_vector(result.x.iter().copied()))?;
    }
    Ok(())
}

/// Print the report to stdout.
pub fn print_report(results: &[SolveResult]) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    // writing to a locked stdout only fails on a broken pipe
    let _ = write_report(&mut lock, results);
}

fn format_vector(values: impl Iterator<Item = f64>) -> String {
    let entries: Vec<String> = values.map(|v| format!("{v:.6}")).collect();
    format!("[{}]", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::SolveMethod;
    use ndarray::array;

    #[test]
    fn test_report_preserves_order_and_units() {
        let results = vec![
            SolveResult {
                method: SolveMethod::DirectInverse,
                x: array![1.0_f64, 2.0],
                elapsed_ms: 1.25,
                residual: 1e-12,
            },
            SolveResult {
                method: SolveMethod::QrDecomposition,
                x: array![1.0_f64, 2.0],
                elapsed_ms: 0.5,
                residual: 1e-13,
            },
            SolveResult {
                method: SolveMethod::LdltDecomposition,
                x: array![1.0_f64, 2.0],
                elapsed_ms: 0.25,
                residual: 1e-13,
            },
        ];

        let mut buf = Vec::new();
        write_report(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let direct = text.find("direct_inverse").unwrap();
        let qr = text.find("qr_decomposition").unwrap();
        let ldlt = text.find("ldlt_decomposition").unwrap();
        assert!(direct < qr && qr < ldlt);

        assert!(text.contains("1.250 ms"));
        assert!(text.contains("x = [1.000000, 2.000000]"));
    }
}
