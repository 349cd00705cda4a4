use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("pg-if");
        set.insert("pg-else");
        set.insert("pg-while");
        set.insert("pg-for");
        set.insert("pg-def");
        set.insert("pg-return");
        set.insert("pg-print");
        set.insert("pg-and");
        set.insert("pg-or");
        set.insert("pg-not");
        set.insert("pg-true");
        set.insert("pg-false");
        set
    };
    pub static ref SINGLE_SYMBOLS: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Mult);
        map.insert('/', TokenKind::Div);
        map.insert('%', TokenKind::Mod);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert('[', TokenKind::LBracket);
        map.insert(']', TokenKind::RBracket);
        map.insert(',', TokenKind::Comma);
        map.insert(':', TokenKind::Colon);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    String,

    Assign, // =
    Eq,     // ==
    Lt,
    Gt,
    Leq,
    Geq,
    Neq, // !=

    Plus,
    Minus,
    Mult,
    Div,
    Mod,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,
}

impl TokenKind {
    /// Upper-case tag used when printing token listings, e.g. `ID` or `LEQ`.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "ID",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Leq => "LEQ",
            TokenKind::Geq => "GEQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, '{}', {})", self.kind.tag(), self.lexeme, self.line)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Literal tokens carry text a downstream consumer still has to interpret.
    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Integer, TokenKind::Float, TokenKind::String])
    }
}
