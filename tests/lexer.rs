use ascent::interpreter::{
    lexer::{
        core::tokenize,
        cursor::strip_whitespace,
        token::{Token, TokenKind},
    },
    splitter::{TokenContainer, split},
    trie::Trie,
};
use pretty_assertions::assert_eq;

const BUILTINS: [&str; 3] = ["sin", "sqrt", "frac"];

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, BUILTINS).tokens.iter().map(|t| t.kind).collect()
}

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source, BUILTINS).tokens
}

#[test]
fn whitespace_outside_strings_is_removed() {
    assert_eq!(strip_whitespace("let  x =\t1;\n\"a  b\" + c"), "letx=1;\"a  b\"+c");
}

#[test]
fn declared_names_change_classification() {
    use TokenKind::*;

    assert_eq!(kinds("let x = 1; x = x + 1; x;"),
               [Let, Number, Semicolon, Assign, Variable, Plus, Number, Semicolon, Variable,
                Semicolon]);

    let tokens = tokens("let total = 2; total = 3;");
    assert_eq!(tokens[0], Token::new(Let, "total"));
    assert_eq!(tokens[3], Token::new(Assign, "total"));
}

#[test]
fn names_are_only_known_after_their_declaration() {
    use TokenKind::*;

    assert_eq!(kinds("x; let x = 2; x;"),
               [Semicolon, Let, Number, Semicolon, Variable, Semicolon]);
    assert_eq!(kinds("y + 1"), [Plus, Number]);
}

#[test]
fn minus_is_subtraction_only_after_an_operand() {
    use TokenKind::*;

    assert_eq!(kinds("3-1"), [Number, Minus, Number]);
    assert_eq!(kinds("-1"), [Number]);
    assert_eq!(tokens("-1")[0].text, "-1");
    assert_eq!(kinds("(-1)"), [LeftParen, Number, RightParen]);
    assert_eq!(kinds("2*-1"), [Number, Star, Number]);
    assert_eq!(kinds("(2)-1"), [LeftParen, Number, RightParen, Minus, Number]);
    assert_eq!(kinds("let x = 1; x-1"), [Let, Number, Semicolon, Variable, Minus, Number]);
    assert_eq!(kinds("1 - -2"), [Number, Minus, Number]);
    assert_eq!(tokens("1 - -2")[2].text, "-2");
    assert_eq!(kinds("let x = 1; x--; x - -0.5"),
               [Let, Number, Semicolon, Variable, Decrement, Semicolon, Variable, Minus, Number]);
}

#[test]
fn multi_character_operators() {
    use TokenKind::*;

    assert_eq!(kinds("let i = 0; i++; i--; i += 2; i -= 2;"),
               [Let, Number, Semicolon, Variable, Increment, Semicolon, Variable, Decrement,
                Semicolon, Variable, PlusAssign, Number, Semicolon, Variable, MinusAssign, Number,
                Semicolon]);
}

#[test]
fn parameters_are_visible_only_inside_their_function() {
    use TokenKind::*;

    assert_eq!(kinds("function f(a, b){ return a + b; } a;"),
               [Function, LeftParen, Parameter, Comma, Parameter, RightParen, LeftScope, Return,
                Variable, Plus, Variable, Semicolon, RightScope, Semicolon]);
    assert_eq!(tokens("function add(a, b){}")[0], Token::new(Function, "add"));
}

#[test]
fn loops_inside_functions_keep_parameters_visible() {
    use TokenKind::*;

    assert_eq!(kinds("function g(n){ while(n){ n--; } }"),
               [Function, LeftParen, Parameter, RightParen, LeftScope, While, LeftParen, Variable,
                RightParen, LeftScope, Variable, Decrement, Semicolon, RightScope, RightScope]);
}

#[test]
fn functions_are_callable_only_once_declared() {
    use TokenKind::*;

    assert_eq!(kinds("f(1); function f(x){ return x; } f(2);"),
               [LeftParen, Number, RightParen, Semicolon, Function, LeftParen, Parameter,
                RightParen, LeftScope, Return, Variable, Semicolon, RightScope, Call, LeftParen,
                Number, RightParen, Semicolon]);
    assert_eq!(kinds("sqrt(4) + frac(1.5)"),
               [Call, LeftParen, Number, RightParen, Plus, Call, LeftParen, Number, RightParen]);
}

#[test]
fn keywords_and_literals() {
    use TokenKind::*;

    assert_eq!(kinds("true; false; \"a b\"; 1.5;"),
               [True, Semicolon, False, Semicolon, Text, Semicolon, Number, Semicolon]);
    assert_eq!(tokens("\"a b\"")[0], Token::new(Text, "a b"));
    assert_eq!(kinds("for(let i=0;i<2;i=i+1){}"),
               [For, LeftParen, Let, Number, Semicolon, Variable, Less, Number, Semicolon, Assign,
                Variable, Plus, Number, RightParen, LeftScope, RightScope]);
}

#[test]
fn query_and_member_access() {
    use TokenKind::*;

    let tokens = tokens("q.time + query.speed");
    assert_eq!(tokens,
               [Token::new(Query, "time"), Token::new(Plus, "+"), Token::new(Query, "speed")]);

    assert_eq!(kinds("import player-object; player.health = player.health + 1;"),
               [Import, Semicolon, Variable, Access, Equals, Variable, Access, Plus, Number,
                Semicolon]);
}

#[test]
fn directives_are_collected() {
    use TokenKind::*;

    let tokenized = tokenize("namespace Game; using Engine.Math; import speed-float; speed * 2;",
                             BUILTINS);

    assert_eq!(tokenized.usings, ["Engine.Math"]);
    assert_eq!(tokenized.imports, ["speed-float"]);
    assert_eq!(tokenized.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [Namespace, Semicolon, Using, Semicolon, Import, Semicolon, Variable, Star, Number,
                Semicolon]);
    assert_eq!(tokenized.tokens[0].text, "Game");
}

#[test]
fn unknown_characters_are_skipped() {
    use TokenKind::*;

    assert_eq!(kinds("1 @ 2"), [Number, Number]);
    assert_eq!(kinds("1 + # 2"), [Number, Plus, Number]);
}

#[test]
fn trie_prefix_queries() {
    let trie: Trie = ["for", "while", "false"].into_iter().collect();

    assert_eq!(trie.len(), 3);
    assert!(trie.contains("for"));
    assert!(!trie.contains("fo"));
    assert!(trie.partial_contains("f"));
    assert!(trie.partial_contains("fa"));
    assert!(!trie.partial_contains("for"));
    assert!(!trie.partial_contains("x"));
    assert!(trie.starts_with("whi"));
    assert!(!trie.starts_with("w h"));
}

#[test]
fn trie_longest_match() {
    let trie: Trie = ["a", "ab", "abc"].into_iter().collect();

    assert_eq!(trie.longest_match("abcd"), Some(3));
    assert_eq!(trie.longest_match("abx"), Some(2));
    assert_eq!(trie.longest_match("b"), None);
    assert!(Trie::new().is_empty());
}

#[test]
fn splitter_keeps_for_header_together() {
    let TokenContainer::Scope(root) = split(tokens("for(let i=0;i<2;i=i+1){ i; } 1;")) else {
        panic!("root must be a scope");
    };

    assert_eq!(root.len(), 2);
    let TokenContainer::Scope(body) = &root[0] else { panic!("expected the loop scope") };
    let TokenContainer::Statement(header) = &body[0] else { panic!("expected the header") };

    assert_eq!(header.first().map(|t| t.kind), Some(TokenKind::For));
    assert_eq!(header.last().map(|t| t.kind), Some(TokenKind::LeftScope));
    assert_eq!(body.len(), 3);
    assert!(body[2].is_scope_close());
}

#[test]
fn splitter_closes_unterminated_scopes() {
    let TokenContainer::Scope(root) = split(tokens("let x = 0; while(x < 1){ x = 1;")) else {
        panic!("root must be a scope");
    };

    let TokenContainer::Scope(body) = &root[1] else { panic!("expected the loop scope") };
    assert_eq!(body.len(), 2);
    assert!(!body.iter().any(TokenContainer::is_scope_close));
}
