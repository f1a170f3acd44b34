use super::network::{CityId, Target};
use super::parser_utils::*;

/// Children lists and query targets as read from the input, before the
/// tree structure has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInput {
    pub children: Vec<Vec<CityId>>,
    pub targets: Vec<Target>,
}

// PARSER
//
// N
// K_1 c_1 .. c_K       (one line per city 1..N)
// ...
// Q
// t_1 .. t_Q

pub fn parse(t: &[Token]) -> Result<ProblemInput, ParseError> {
    let mut i = 0;
    let n = count(&mut i, t)?;
    let mut children = Vec::with_capacity(n.min(t.len()));
    for _ in 0..n {
        children.push(list(&mut i, t, |i, t| city(i, t, n))?);
    }
    let targets = list(&mut i, t, number)?;
    if !at_end(i, t) {
        warn!("Ignoring input after the last query.");
    }
    Ok(ProblemInput { children, targets })
}

fn city(i: &mut usize, t: &[Token], n: usize) -> Result<CityId, ParseError> {
    let start = *i;
    let id = number(i, t)?;
    if id < 1 || id > n as i64 {
        return Err(ParseError::InvalidCity(start, id));
    }
    Ok(id as CityId)
}

#[test]
fn test_parse_problem() {
    let tokens = lexer(&mut "5\n2 2 3\n2 4 5\n0\n0\n0\n3\n5 4 -1\n".chars());
    let p = parse(&tokens).unwrap();
    assert_eq!(p.children, vec![vec![2, 3], vec![4, 5], vec![], vec![], vec![]]);
    assert_eq!(p.targets, vec![5, 4, -1]);
}

#[test]
fn test_parse_layout_free() {
    // Line breaks carry no meaning.
    let tokens = lexer(&mut "2 1 2 0 2 1 2".chars());
    let p = parse(&tokens).unwrap();
    assert_eq!(p.children, vec![vec![2], vec![]]);
    assert_eq!(p.targets, vec![1, 2]);
}

#[test]
fn test_parse_errors() {
    let parse_str = |s: &str| parse(&lexer(&mut s.chars()));
    assert_eq!(parse_str(""), Err(ParseError::UnexpectedEOF));
    assert_eq!(parse_str("3 1 2 0"), Err(ParseError::UnexpectedEOF));
    assert_eq!(parse_str("2 1 2 0 3 1"), Err(ParseError::UnexpectedEOF));
    assert_eq!(parse_str("2 1 7 0 0"), Err(ParseError::InvalidCity(2, 7)));
    assert_eq!(parse_str("2 -1"), Err(ParseError::InvalidCount(1, -1)));
    assert_eq!(parse_str("-2"), Err(ParseError::InvalidCount(0, -2)));
    assert_eq!(parse_str("2 1 x"),
               Err(ParseError::Lexer(LexerError::UnexpectedChar { line: 1, c: "x".to_string() })));
}

#[test]
fn test_parse_trailing_tokens() {
    let tokens = lexer(&mut "1 0 1 1 9 9".chars());
    let p = parse(&tokens).unwrap();
    assert_eq!(p.targets, vec![1]);

    // Text that is not a number is treated the same way.
    let tokens = lexer(&mut "1 0 1 1\nend\n".chars());
    let p = parse(&tokens).unwrap();
    assert_eq!(p.targets, vec![1]);
}

#[test]
fn test_parse_signed_targets() {
    let tokens = lexer(&mut "1 0 2 +1 -1".chars());
    assert_eq!(parse(&tokens).unwrap().targets, vec![1, -1]);
}

#[test]
fn test_parse_no_queries() {
    let tokens = lexer(&mut "1 0 0".chars());
    assert_eq!(parse(&tokens).unwrap().targets, Vec::<Target>::new());
}
