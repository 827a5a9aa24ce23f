/*
 * @Description  : prototxt的词法分析：把文本切分为带行列号的记号（token）
 */

use super::error::PrototxtError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub(in crate::prototxt) enum TokenKind {
    /// 字段名、枚举值、true/false等
    Ident(String),
    /// 数字的原始文本（如`-1.5e3`、`0x1F`、`-inf`），由`Scalar`在取值时再解析
    Number(String),
    /// 已处理过转义的字符串内容
    Str(String),
    /// `{ } < > [ ] : , ;`
    Symbol(char),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) => write!(f, "标识符`{s}`"),
            Self::Number(s) => write!(f, "数字`{s}`"),
            Self::Str(s) => write!(f, "字符串\"{s}\""),
            Self::Symbol(c) => write!(f, "符号`{c}`"),
            Self::Eof => write!(f, "文件结尾"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(in crate::prototxt) struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

pub(in crate::prototxt) struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// 切分全部文本，结果总以`Eof`结尾
    pub fn tokenize(mut self) -> Result<Vec<Token>, PrototxtError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '#' {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, PrototxtError> {
        self.skip_whitespace_and_comments();
        let (line, column) = (self.line, self.column);
        let make = |kind| Token { kind, line, column };

        let Some(c) = self.peek() else {
            return Ok(make(TokenKind::Eof));
        };

        match c {
            '{' | '}' | '<' | '>' | '[' | ']' | ':' | ',' | ';' => {
                self.bump();
                Ok(make(TokenKind::Symbol(c)))
            }
            '"' | '\'' => Ok(make(TokenKind::Str(self.read_string(c)?))),
            c if c.is_ascii_digit() => Ok(make(TokenKind::Number(self.read_number()))),
            '.' if self.peek_at(1).is_some_and(|n| n.is_ascii_digit()) => {
                Ok(make(TokenKind::Number(self.read_number())))
            }
            '-' | '+'
                if self
                    .peek_at(1)
                    .is_some_and(|n| n.is_ascii_alphanumeric() || n == '.') =>
            {
                Ok(make(TokenKind::Number(self.read_number())))
            }
            c if c.is_alphabetic() || c == '_' => Ok(make(TokenKind::Ident(self.read_ident()))),
            _ => Err(PrototxtError::UnexpectedChar {
                line,
                column,
                found: c,
            }),
        }
    }

    fn read_ident(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '.' {
                ident.push(c);
                self.bump();
            } else {
                break;
            }
        }
        ident
    }

    /// 数字的合法性在取值时才检查，这里只按字符类别吞入
    fn read_number(&mut self) -> String {
        let mut raw = String::new();
        if let Some(sign @ ('-' | '+')) = self.peek() {
            raw.push(sign);
            self.bump();
        }
        while let Some(c) = self.peek() {
            let is_exponent_sign = (c == '-' || c == '+')
                && raw.ends_with(['e', 'E'])
                && !raw.trim_start_matches(['-', '+']).starts_with("0x");
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || is_exponent_sign {
                raw.push(c);
                self.bump();
            } else {
                break;
            }
        }
        raw
    }

    fn read_string(&mut self, quote: char) -> Result<String, PrototxtError> {
        let (line, column) = (self.line, self.column);
        self.bump();
        let mut content = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(PrototxtError::UnterminatedString { line, column }),
                Some(c) if c == quote => return Ok(content),
                Some('\\') => content.push(self.read_escape()?),
                Some(c) => content.push(c),
            }
        }
    }

    fn read_escape(&mut self) -> Result<char, PrototxtError> {
        let (line, column) = (self.line, self.column);
        let Some(c) = self.bump() else {
            return Err(PrototxtError::UnterminatedString { line, column });
        };
        let escaped = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0c',
            'v' => '\x0b',
            '\\' | '\'' | '"' | '?' => c,
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            self.bump();
                        }
                        None => break,
                    }
                }
                char::from_u32(value).ok_or(PrototxtError::InvalidEscape {
                    line,
                    column,
                    found: c,
                })?
            }
            'x' => {
                let mut value = 0;
                let mut digits = 0;
                while digits < 2 {
                    match self.peek().and_then(|d| d.to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            digits += 1;
                            self.bump();
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    return Err(PrototxtError::InvalidEscape {
                        line,
                        column,
                        found: c,
                    });
                }
                char::from_u32(value).ok_or(PrototxtError::InvalidEscape {
                    line,
                    column,
                    found: c,
                })?
            }
            other => {
                return Err(PrototxtError::InvalidEscape {
                    line,
                    column,
                    found: other,
                });
            }
        };
        Ok(escaped)
    }
}
