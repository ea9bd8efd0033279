use crate::error_handling::*;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    identifier, number, operator, punctuation
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(content: String, kind: TokenKind) -> Self {
        Self{content, kind}
    }
}

fn is_operator(character: char) -> bool {
    match character {
        '+' | '-' | '*' | '/' | '^' => true,
        _ => false
    }
}

fn is_punctuation(character: char) -> bool {
    match character {
        '(' | ')' => true,
        _ => false
    }
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn is_word(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

pub struct StringScanner {
    string: String,
    index: usize,
}

impl StringScanner {
    pub fn new(string: String) -> Self {
        Self{string, index: 0}
    }

    fn count<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        let mut chars = self.string.chars().skip(self.index);
        let mut counter = 0;
        while let Some(c) = chars.next() {
            if !predicate(c) {
                break;
            }
            counter += 1;
        }
        counter
    }

    fn view(&self) -> &str {
        &self.string[self.index..]
    }

    fn skip_whitespace(&mut self) {
        let count = self.count(char::is_whitespace);
        self.index += count;
    }

    fn get_number(&self) -> Token {
        let count = self.count(is_digit_or_dot);
        Token::new(self.string[self.index..(self.index + count)].into(), TokenKind::number)
    }

    fn get_identifier(&self) -> Token {
        let count = self.count(is_word);
        Token::new(self.string[self.index..(self.index + count)].into(), TokenKind::identifier)
    }

    fn get_single(&self, kind: TokenKind) -> Token {
        Token::new(self.string[self.index..(self.index + 1)].into(), kind)
    }

    fn get_token(&self) -> Result<Option<Token>> {
        if self.view().is_empty() {
            Ok(None)
        } else if self.view().starts_with(|c: char| c.is_ascii_digit()) {
            Ok(Some(self.get_number()))
        } else if self.view().starts_with(is_operator) {
            Ok(Some(self.get_single(TokenKind::operator)))
        } else if self.view().starts_with(is_punctuation) {
            Ok(Some(self.get_single(TokenKind::punctuation)))
        } else if self.view().starts_with(|c: char| c.is_ascii_alphabetic()) {
            Ok(Some(self.get_identifier()))
        } else {
            Err(CalcError::invalid_character(self.view().chars().next().unwrap_or(' ')))
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        let token = self.get_token()?;
        if let Some(token) = &token {
            self.index += token.content.len();
        }
        Ok(token)
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut scanner = StringScanner::new(text.into());
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
