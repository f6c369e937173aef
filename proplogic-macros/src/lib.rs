use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for propositional formulas
enum Formula {
    Variable(Ident),
    StringLiteral(syn::LitStr),
    Constant(bool),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Xor(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Generate code calling the by-reference builder methods of `Expr`
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Formula::Variable(ident) => quote! { #ident },
            Formula::StringLiteral(lit) => quote! { Expr::variable(#lit) },
            Formula::Constant(value) => quote! { Expr::constant(#value) },
            Formula::Not(inner) => {
                let inner = inner.to_tokens();
                quote! { Expr::not(&(#inner)) }
            }
            Formula::And(l, r) => binary(l, r, quote! { and }),
            Formula::Xor(l, r) => binary(l, r, quote! { xor }),
            Formula::Or(l, r) => binary(l, r, quote! { or }),
            Formula::Implies(l, r) => binary(l, r, quote! { implies }),
            Formula::Iff(l, r) => binary(l, r, quote! { iff }),
        }
    }
}

fn binary(
    left: &Formula,
    right: &Formula,
    method: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    let left = left.to_tokens();
    let right = right.to_tokens();
    quote! { Expr::#method(&(#left), &(#right)) }
}

struct FormulaParser {
    formula: Formula,
}

impl Parse for FormulaParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let formula = parse_iff(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected token after expression"));
        }
        Ok(FormulaParser { formula })
    }
}

/// Parse biconditionals (lowest precedence), written `==`
fn parse_iff(input: ParseStream) -> Result<Formula> {
    let mut left = parse_implies(input)?;

    while input.peek(Token![==]) {
        input.parse::<Token![==]>()?;
        let right = parse_implies(input)?;
        left = Formula::Iff(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_implies(input: ParseStream) -> Result<Formula> {
    let mut left = parse_or(input)?;

    while input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        let right = parse_or(input)?;
        left = Formula::Implies(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_or(input: ParseStream) -> Result<Formula> {
    let mut left = parse_xor(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let right = parse_xor(input)?;
        left = Formula::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_xor(input: ParseStream) -> Result<Formula> {
    let mut left = parse_and(input)?;

    while input.peek(Token![^]) {
        input.parse::<Token![^]>()?;
        let right = parse_and(input)?;
        left = Formula::Xor(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_and(input: ParseStream) -> Result<Formula> {
    let mut left = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let right = parse_unary(input)?;
        left = Formula::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse NOT (highest precedence) and atoms
fn parse_unary(input: ParseStream) -> Result<Formula> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Formula::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

/// Parse variables, string literals, constants and parenthesised formulas
fn parse_atom(input: ParseStream) -> Result<Formula> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let inner = parse_iff(&content)?;
        if !content.is_empty() {
            return Err(content.error("unexpected token in parentheses"));
        }
        Ok(inner)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Formula::StringLiteral(lit))
    } else if input.peek(syn::LitBool) {
        let lit: syn::LitBool = input.parse()?;
        Ok(Formula::Constant(lit.value))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Formula::Constant(false)),
            1 => Ok(Formula::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Formula::Variable(ident))
    }
}

/// The `expr!` procedural macro for propositional formulas
///
/// Builds an `Expr` from Rust tokens with the same precedence as the text parser.
/// `Expr` must be in scope at the call site.
///
/// # Supported Syntax
///
/// - `a` - any `Expr` value in scope, used by reference
/// - `"a"` - string literal, creates `Expr::variable("a")`
/// - `0` / `false` and `1` / `true` - constants
/// - `!a` - NOT
/// - `a & b` - AND
/// - `a ^ b` - XOR
/// - `a | b` - OR
/// - `a -> b` - implication
/// - `a == b` - biconditional
/// - `( )` - grouping
///
/// # Operator Precedence
///
/// From highest to lowest: `!`, `&`, `^`, `|`, `->`, `==`. Binary operators are
/// left-associative.
///
/// # Examples
///
/// ```ignore
/// use proplogic::{expr, Expr};
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
///
/// let modus_ponens = expr!((a -> b) & a -> b);
/// let de_morgan = expr!(!(a & b) == !a | !b);
///
/// // String literals and constants
/// let xor = expr!("p" ^ "q" & 1);
///
/// // Sub-expressions compose
/// let both = expr!(modus_ponens & de_morgan);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as FormulaParser);
    let tokens = parser.formula.to_tokens();
    TokenStream::from(tokens)
}
