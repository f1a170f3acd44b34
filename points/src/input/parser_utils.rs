use std::iter::Peekable;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[fail(display = "unexpected character {:?} on line {}", c, line)]
    UnexpectedChar { line: usize, c: String },
    #[fail(display = "invalid number {:?} on line {}", text, line)]
    InvalidNumber { line: usize, text: String },
}

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[fail(display = "unexpected end of input")]
    UnexpectedEOF,
    #[fail(display = "invalid count {} at token {}", _1, _0)]
    InvalidCount(usize, i64),
    #[fail(display = "invalid city {} at token {}", _1, _0)]
    InvalidCity(usize, i64),
    #[fail(display = "{}", _0)]
    Lexer(LexerError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(i64),
    /// Text that is not a number. Ends the token stream, and is only an
    /// error if the parser gets this far.
    Invalid(LexerError),
    EOF,
}

pub fn lexer(x: &mut dyn Iterator<Item = char>) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut input = x.peekable();
    let mut line = 1;
    while let Some(&ch) = input.peek() {
        match ch {
            x if x.is_ascii_digit() || x == '-' || x == '+' => {
                let mut text = String::new();
                if x == '-' || x == '+' {
                    input.next();
                    text.push(x);
                }
                text.extend(consume_while(&mut input, |a| a.is_ascii_digit()));
                match text.parse::<i64>() {
                    Ok(num) => tokens.push(Token::Number(num)),
                    Err(_) => {
                        tokens.push(Token::Invalid(LexerError::InvalidNumber { line, text }));
                        return tokens;
                    }
                }
            }
            ' ' | '\r' | '\t' => {
                input.next();
            }
            '\n' => {
                input.next();
                line += 1;
            }
            c => {
                tokens.push(Token::Invalid(LexerError::UnexpectedChar {
                    line,
                    c: c.to_string(),
                }));
                return tokens;
            }
        }
    }
    tokens.push(Token::EOF);
    tokens
}

fn consume_while<F>(it: &mut Peekable<&mut dyn Iterator<Item = char>>, x: F) -> Vec<char>
    where F: Fn(char) -> bool
{
    let mut v: Vec<char> = vec![];

    while let Some(&ch) = it.peek() {
        if x(ch) {
            it.next();
            v.push(ch);
        } else {
            break;
        }
    }

    v
}

pub fn number(i: &mut usize, tokens: &[Token]) -> Result<i64, ParseError> {
    let r = match tokens.get(*i) {
        Some(&Token::Number(x)) => x,
        Some(&Token::Invalid(ref e)) => return Err(ParseError::Lexer(e.clone())),
        Some(&Token::EOF) | None => return Err(ParseError::UnexpectedEOF),
    };
    *i += 1;
    Ok(r)
}

/// A non-negative number used as a length prefix.
pub fn count(i: &mut usize, tokens: &[Token]) -> Result<usize, ParseError> {
    let start = *i;
    let n = number(i, tokens)?;
    if n < 0 {
        return Err(ParseError::InvalidCount(start, n));
    }
    Ok(n as usize)
}

/// `count` followed by that many items.
pub fn list<F, O>(i: &mut usize, tokens: &[Token], f: F) -> Result<Vec<O>, ParseError>
    where F: Fn(&mut usize, &[Token]) -> Result<O, ParseError>
{
    let n = count(i, tokens)?;
    let mut v = Vec::with_capacity(n.min(tokens.len()));
    for _ in 0..n {
        v.push(f(i, tokens)?);
    }
    Ok(v)
}

pub fn at_end(i: usize, tokens: &[Token]) -> bool {
    match tokens.get(i) {
        Some(&Token::EOF) | None => true,
        _ => false,
    }
}

#[test]
fn test_lexer() {
    let tokens = lexer(&mut "3\n 2 -7\t\r\n0 +4".chars());
    assert_eq!(tokens, vec![Token::Number(3), Token::Number(2), Token::Number(-7),
                            Token::Number(0), Token::Number(4), Token::EOF]);
}

#[test]
fn test_lexer_errors() {
    assert_eq!(lexer(&mut "1\n2 x 3".chars()),
               vec![Token::Number(1), Token::Number(2),
                    Token::Invalid(LexerError::UnexpectedChar { line: 2, c: "x".to_string() })]);
    assert_eq!(lexer(&mut "1 - 2".chars()),
               vec![Token::Number(1),
                    Token::Invalid(LexerError::InvalidNumber { line: 1, text: "-".to_string() })]);
    assert_eq!(lexer(&mut "+".chars()),
               vec![Token::Invalid(LexerError::InvalidNumber { line: 1, text: "+".to_string() })]);
    match lexer(&mut "99999999999999999999".chars()).last() {
        Some(&Token::Invalid(LexerError::InvalidNumber { .. })) => {}
        x => panic!("expected invalid number, got {:?}", x),
    }
}

#[test]
fn test_number_reaches_invalid() {
    let tokens = lexer(&mut "4 x".chars());
    let mut i = 0;
    assert_eq!(number(&mut i, &tokens), Ok(4));
    assert_eq!(number(&mut i, &tokens),
               Err(ParseError::Lexer(LexerError::UnexpectedChar { line: 1, c: "x".to_string() })));
    assert!(!at_end(i, &tokens));
}

#[test]
fn test_list() {
    let tokens = lexer(&mut "2 5 6 -1".chars());
    let mut i = 0;
    assert_eq!(list(&mut i, &tokens, number).unwrap(), vec![5, 6]);
    assert_eq!(count(&mut i, &tokens), Err(ParseError::InvalidCount(3, -1)));
    let mut i = 0;
    let tokens = lexer(&mut "3 1 2".chars());
    assert_eq!(list(&mut i, &tokens, number), Err(ParseError::UnexpectedEOF));
}
