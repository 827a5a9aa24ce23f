/*
 * @Description  : prototxt的语法分析（递归下降）。支持的写法：
 *                 - `name: 标量`
 *                 - `name: [a, b, ...]`（展开为多个同名字段）
 *                 - `name { ... }`、`name: { ... }`、`name < ... >`
 *                 - 相邻的字符串字面量自动拼接
 *                 - 字段之间可选的`,`或`;`分隔符
 */

use super::error::PrototxtError;
use super::lexer::{Lexer, Token, TokenKind};
use super::message::{Field, Message, Scalar, Value};

/// 子消息的最大嵌套层数，与protobuf文本解析器的缺省值一致
pub const MAX_NESTING_DEPTH: usize = 100;

/// 把prototxt文本解析为消息树（整个文件视为一条顶层消息）
pub fn parse(text: &str) -> Result<Message, PrototxtError> {
    let tokens = Lexer::new(text).tokenize()?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    parser.parse_message_body(None)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// 当前所在子消息的嵌套层数，顶层消息为0
    depth: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // `tokenize`保证最后一个记号为Eof，所以越界时一直停在Eof上
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn peek_symbol(&self) -> Option<char> {
        match self.peek().kind {
            TokenKind::Symbol(c) => Some(c),
            _ => None,
        }
    }

    fn unexpected(&self, expected: &str) -> PrototxtError {
        let token = self.peek();
        PrototxtError::UnexpectedToken {
            line: token.line,
            column: token.column,
            expected: expected.to_string(),
            found: token.kind.to_string(),
        }
    }

    fn expect_symbol(&mut self, symbol: char) -> Result<(), PrototxtError> {
        if self.peek_symbol() == Some(symbol) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{symbol}`")))
        }
    }

    /// 解析消息体，直到遇到`end`（顶层消息时为None，即直到文件结尾）
    fn parse_message_body(&mut self, end: Option<char>) -> Result<Message, PrototxtError> {
        let mut message = Message::new();
        loop {
            match (self.peek().kind.clone(), end) {
                (TokenKind::Eof, None) => return Ok(message),
                (TokenKind::Eof, Some(end)) => return Err(self.unexpected(&format!("`{end}`"))),
                (TokenKind::Symbol(c), Some(end)) if c == end => {
                    self.advance();
                    return Ok(message);
                }
                _ => {}
            }

            self.parse_field(&mut message)?;

            if matches!(self.peek_symbol(), Some(',' | ';')) {
                self.advance();
            }
        }
    }

    fn parse_field(&mut self, message: &mut Message) -> Result<(), PrototxtError> {
        let name_token = self.advance();
        let name = match name_token.kind {
            TokenKind::Ident(name) => name,
            TokenKind::Symbol('[') => {
                let name = match self.advance().kind {
                    TokenKind::Ident(name) => name,
                    other => other.to_string(),
                };
                return Err(PrototxtError::ExtensionNotSupported {
                    line: name_token.line,
                    column: name_token.column,
                    name,
                });
            }
            other => {
                return Err(PrototxtError::UnexpectedToken {
                    line: name_token.line,
                    column: name_token.column,
                    expected: "字段名".to_string(),
                    found: other.to_string(),
                });
            }
        };
        let line = name_token.line;

        let has_colon = self.peek_symbol() == Some(':');
        if has_colon {
            self.advance();
        }

        match self.peek_symbol() {
            Some('{') | Some('<') => {
                let value = self.parse_nested_message()?;
                message.push(Field { name, value, line });
            }
            Some('[') if has_colon => {
                for value in self.parse_list()? {
                    message.push(Field {
                        name: name.clone(),
                        value,
                        line,
                    });
                }
            }
            _ if has_colon => {
                let value = Value::Scalar(self.parse_scalar()?);
                message.push(Field { name, value, line });
            }
            _ => return Err(self.unexpected("`:`或`{`")),
        }
        Ok(())
    }

    fn parse_nested_message(&mut self) -> Result<Value, PrototxtError> {
        let open = self.advance();
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(PrototxtError::NestingTooDeep {
                line: open.line,
                column: open.column,
                limit: MAX_NESTING_DEPTH,
            });
        }
        let end = match open.kind {
            TokenKind::Symbol('{') => '}',
            _ => '>',
        };

        self.depth += 1;
        let body = self.parse_message_body(Some(end));
        self.depth -= 1;
        Ok(Value::Message(body?))
    }

    fn parse_list(&mut self) -> Result<Vec<Value>, PrototxtError> {
        self.expect_symbol('[')?;
        let mut values = Vec::new();
        if self.peek_symbol() == Some(']') {
            self.advance();
            return Ok(values);
        }
        loop {
            let value = match self.peek_symbol() {
                Some('{') | Some('<') => self.parse_nested_message()?,
                _ => Value::Scalar(self.parse_scalar()?),
            };
            values.push(value);
            match self.peek_symbol() {
                Some(',') => {
                    self.advance();
                }
                Some(']') => {
                    self.advance();
                    return Ok(values);
                }
                _ => return Err(self.unexpected("`,`或`]`")),
            }
        }
    }

    fn parse_scalar(&mut self) -> Result<Scalar, PrototxtError> {
        let scalar = match &self.peek().kind {
            TokenKind::Ident(s) => Scalar::Ident(s.clone()),
            TokenKind::Number(s) => Scalar::Number(s.clone()),
            TokenKind::Str(_) => {
                let mut content = String::new();
                while let TokenKind::Str(s) = &self.peek().kind {
                    content.push_str(s);
                    self.advance();
                }
                return Ok(Scalar::Str(content));
            }
            _ => return Err(self.unexpected("标量值")),
        };
        self.advance();
        Ok(scalar)
    }
}
