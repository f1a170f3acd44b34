use crate::railway::route::QueryOutcome;
use std::io;

/// One result per line: the number of switch changes, or `-1` for a
/// target outside the network.
pub fn write_results<W: io::Write>(results: &[QueryOutcome], f: &mut W) -> Result<(), failure::Error> {
    for r in results {
        writeln!(f, "{}", r)?;
    }
    f.flush()?;
    Ok(())
}

#[test]
fn test_write_results() {
    let mut buf = Vec::new();
    write_results(&[QueryOutcome::Flips(0), QueryOutcome::InvalidTarget, QueryOutcome::Flips(3)],
                  &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "0\n-1\n3\n");
}
