//! Dice expression parser and shunting-yard evaluator.

use crate::{
    error::dice::DiceError,
    model::dice::{DiceSpec, Operator, RollOutcome, Token},
    util::random::RandomSource,
};

/// Most dice accepted in one expression.
pub const MAX_ROLL_COUNT: u32 = 100;
/// Most sides accepted on one die.
pub const MAX_DIE_SIZE: u32 = 1_000_000;

const FORBIDDEN_OPERATORS: [&str; 3] = ["//", "**", "^"];

fn invalid(reason: impl Into<String>) -> DiceError {
    DiceError::InvalidFormat(reason.into())
}

/// Parses and rolls `input` in one step.
///
/// # Arguments
/// - `input` - Raw user text such as `2d20+3`
/// - `rng` - Randomness for the die faces
///
/// # Returns
/// - `Ok(RollOutcome)` - One result per die, in roll order
/// - `Err(DiceError::InvalidFormat)` - Input is not a valid dice expression
/// - `Err(DiceError::ArithmeticError)` - The suffix divides by zero for a rolled face
pub fn evaluate<R: RandomSource + ?Sized>(
    input: &str,
    rng: &mut R,
) -> Result<RollOutcome, DiceError> {
    let spec = parse(input)?;
    roll(&spec, rng)
}

/// Parses `<rolls>d<size><suffix>` into a [`DiceSpec`].
///
/// The `d` is matched case-insensitively and surrounding whitespace is ignored. A die size of
/// 0 is treated as 1. Trailing operators in the suffix are dropped rather than rejected.
///
/// # Returns
/// - `Ok(DiceSpec)` - Parsed specification
/// - `Err(DiceError::InvalidFormat)` - Missing `d`, bad counts, letters, unsupported
///   operators or unbalanced parentheses
pub fn parse(input: &str) -> Result<DiceSpec, DiceError> {
    let input = input.trim().to_ascii_lowercase();

    let (count_text, rest) = input
        .split_once('d')
        .ok_or_else(|| invalid("missing `d` separator"))?;

    let count_text = count_text.trim();
    let roll_count = Some(count_text)
        .filter(|text| !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|text| text.parse::<u32>().ok())
        .filter(|count| *count > 0)
        .ok_or_else(|| invalid(format!("roll count `{}` is not a positive integer", count_text)))?;
    if roll_count > MAX_ROLL_COUNT {
        return Err(invalid(format!("at most {} dice can be rolled", MAX_ROLL_COUNT)));
    }

    let size_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (size_text, suffix) = rest.split_at(size_end);
    if size_text.is_empty() {
        return Err(invalid("missing die size"));
    }
    let die_size = size_text
        .parse::<u32>()
        .map_err(|_| invalid(format!("die size `{}` is too large", size_text)))?
        .max(1);
    if die_size > MAX_DIE_SIZE {
        return Err(invalid(format!("dice have at most {} sides", MAX_DIE_SIZE)));
    }

    Ok(DiceSpec {
        roll_count,
        die_size,
        tokens: tokenize(suffix)?,
    })
}

/// Splits the arithmetic suffix into tokens.
///
/// The suffix always follows the rolled value, so a leading `+`/`-` is a binary operator. A
/// sign directly after an operator or `(` and before a digit starts a signed literal.
fn tokenize(suffix: &str) -> Result<Vec<Token>, DiceError> {
    let compact: String = suffix.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(op) = FORBIDDEN_OPERATORS.iter().find(|op| compact.contains(*op)) {
        return Err(invalid(format!("operator `{}` is not supported", op)));
    }

    let chars: Vec<char> = compact.chars().collect();
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    // The rolled value is spliced in front, so the suffix starts after an operand.
    let mut expects_operand = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_alphabetic() {
            return Err(invalid("letters are not allowed after the die size"));
        }

        let starts_signed = matches!(c, '+' | '-')
            && expects_operand
            && chars
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_digit() || *next == '.');

        if c.is_ascii_digit() || c == '.' || starts_signed {
            if !expects_operand {
                return Err(invalid("missing operator between values"));
            }
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let value = literal
                .parse::<f64>()
                .map_err(|_| invalid(format!("`{}` is not a number", literal)))?;
            tokens.push(Token::Number(value));
            expects_operand = false;
            continue;
        }

        match c {
            '(' => {
                if !expects_operand {
                    return Err(invalid("missing operator before `(`"));
                }
                depth += 1;
                tokens.push(Token::LParen);
            }
            ')' => {
                if depth == 0 {
                    return Err(invalid("unbalanced parentheses"));
                }
                if expects_operand {
                    return Err(invalid("empty or incomplete group"));
                }
                depth -= 1;
                tokens.push(Token::RParen);
            }
            _ => {
                let op = Operator::from_char(c)
                    .ok_or_else(|| invalid(format!("unexpected character `{}`", c)))?;
                if expects_operand {
                    return Err(invalid(format!("operator `{}` is missing an operand", c)));
                }
                tokens.push(Token::Op(op));
                expects_operand = true;
            }
        }
        i += 1;
    }

    if depth != 0 {
        return Err(invalid("unbalanced parentheses"));
    }

    // Trailing operators are dropped; a dangling `+` or `*` reads as a typo, not an error.
    while matches!(tokens.last(), Some(Token::Op(_))) {
        tokens.pop();
    }

    Ok(tokens)
}

/// Rolls every die of `spec` and applies the suffix to each face independently.
///
/// # Returns
/// - `Ok(RollOutcome)` - `spec.roll_count` results in roll order
/// - `Err(DiceError)` - The suffix cannot be evaluated for some face
pub fn roll<R: RandomSource + ?Sized>(
    spec: &DiceSpec,
    rng: &mut R,
) -> Result<RollOutcome, DiceError> {
    let mut rolls = Vec::with_capacity(spec.roll_count as usize);
    let mut results = Vec::with_capacity(spec.roll_count as usize);
    let mut stream = Vec::with_capacity(spec.tokens.len() + 1);

    for _ in 0..spec.roll_count {
        let face = rng.roll_die(spec.die_size);

        stream.clear();
        stream.push(Token::Number(face as f64));
        stream.extend_from_slice(&spec.tokens);

        results.push(evaluate_tokens(&stream)?);
        rolls.push(face);
    }

    Ok(RollOutcome {
        spec: spec.clone(),
        rolls,
        results,
    })
}

enum Pending {
    Op(Operator),
    Group,
}

/// Evaluates an infix token stream with two stacks.
///
/// Operators are left-associative: an incoming operator first applies every stacked operator
/// of higher or equal precedence. A closing parenthesis applies everything back to its group.
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, DiceError> {
    let mut values: Vec<f64> = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(value) => values.push(value),
            Token::LParen => pending.push(Pending::Group),
            Token::RParen => loop {
                match pending.pop() {
                    Some(Pending::Op(op)) => apply(&mut values, op)?,
                    Some(Pending::Group) => break,
                    None => return Err(invalid("unbalanced parentheses")),
                }
            },
            Token::Op(op) => {
                while let Some(Pending::Op(top)) = pending.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    let top = *top;
                    pending.pop();
                    apply(&mut values, top)?;
                }
                pending.push(Pending::Op(op));
            }
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Op(op) => apply(&mut values, op)?,
            Pending::Group => return Err(invalid("unbalanced parentheses")),
        }
    }

    match (values.pop(), values.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(invalid("expression does not reduce to a single value")),
    }
}

fn apply(values: &mut Vec<f64>, op: Operator) -> Result<(), DiceError> {
    let rhs = values.pop();
    let lhs = values.pop();
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => {
            values.push(op.apply(lhs, rhs)?);
            Ok(())
        }
        _ => Err(invalid(format!(
            "operator `{}` is missing an operand",
            op.symbol()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::random::ScriptedSource;
    use rand::{rngs::StdRng, SeedableRng};

    fn eval(tokens: &[Token]) -> Result<f64, DiceError> {
        evaluate_tokens(tokens)
    }

    #[test]
    fn parses_plain_expression() {
        let spec = parse("2d20").unwrap();
        assert_eq!(spec.roll_count, 2);
        assert_eq!(spec.die_size, 20);
        assert!(spec.tokens.is_empty());
    }

    #[test]
    fn parses_suffix_with_whitespace_and_case() {
        let spec = parse(" 3D6 + 2 * (4 - 1) ").unwrap();
        assert_eq!(spec.roll_count, 3);
        assert_eq!(spec.die_size, 6);
        assert_eq!(spec.to_string(), "3d6+2*(4-1)");
    }

    #[test]
    fn zero_sided_die_becomes_one() {
        let spec = parse("1d0+5").unwrap();
        assert_eq!(spec.die_size, 1);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let outcome = roll(&spec, &mut rng).unwrap();
            assert_eq!(outcome.results, vec![6.0]);
        }
    }

    #[test]
    fn rejects_malformed_expressions() {
        for input in [
            "20", "d20", "0d6", "-1d6", "xd6", "2d", "1d6+a", "1d6(2)", "1d6+(2",
            "1d6+2)", "1d6+()", "1d6 3", "1d6+(2)3", "1d6+1.2.3", "1d6%2", "1d6d4",
        ] {
            assert!(
                matches!(parse(input), Err(DiceError::InvalidFormat(_))),
                "expected `{input}` to be rejected"
            );
        }
    }

    #[test]
    fn roll_count_must_be_unsigned_literal() {
        for input in ["+2d6", " +2d6", "2 2d6", "+0d6"] {
            assert!(
                matches!(parse(input), Err(DiceError::InvalidFormat(_))),
                "expected `{input}` to be rejected"
            );
        }
        assert_eq!(parse(" 2d6").unwrap().roll_count, 2);
    }

    #[test]
    fn rejects_unsupported_operators() {
        for input in ["1d6**2", "1d6//2", "1d6^2", "1d6* *2"] {
            assert!(
                matches!(parse(input), Err(DiceError::InvalidFormat(_))),
                "expected `{input}` to be rejected"
            );
        }
    }

    #[test]
    fn rejects_excessive_sizes() {
        assert!(parse("101d6").is_err());
        assert!(parse("1d1000001").is_err());
        assert!(parse("1d99999999999999").is_err());
    }

    #[test]
    fn trims_trailing_operators() {
        let spec = parse("1d6+3*").unwrap();
        assert_eq!(spec.to_string(), "1d6+3");

        let spec = parse("1d6+").unwrap();
        assert!(spec.tokens.is_empty());
    }

    #[test]
    fn signed_literals_follow_operators() {
        let spec = parse("1d6*-2").unwrap();
        assert_eq!(
            spec.tokens,
            vec![Token::Op(Operator::Mul), Token::Number(-2.0)]
        );

        let spec = parse("1d6-2").unwrap();
        assert_eq!(
            spec.tokens,
            vec![Token::Op(Operator::Sub), Token::Number(2.0)]
        );
    }

    #[test]
    fn respects_precedence_and_grouping() {
        use Operator::*;
        let n = Token::Number;

        // 2 + 3 * 4
        assert_eq!(eval(&[n(2.0), Token::Op(Add), n(3.0), Token::Op(Mul), n(4.0)]), Ok(14.0));
        // (2 + 3) * 4
        assert_eq!(
            eval(&[
                Token::LParen,
                n(2.0),
                Token::Op(Add),
                n(3.0),
                Token::RParen,
                Token::Op(Mul),
                n(4.0)
            ]),
            Ok(20.0)
        );
        // 10 - 4 - 3 is left-associative
        assert_eq!(eval(&[n(10.0), Token::Op(Sub), n(4.0), Token::Op(Sub), n(3.0)]), Ok(3.0));
        // 8 / 4 / 2 is left-associative
        assert_eq!(eval(&[n(8.0), Token::Op(Div), n(4.0), Token::Op(Div), n(2.0)]), Ok(1.0));
    }

    #[test]
    fn division_is_floating_point() {
        let mut rng = ScriptedSource::new().dice([3]);
        let outcome = evaluate("1d6/2", &mut rng).unwrap();
        assert_eq!(outcome.results, vec![1.5]);
    }

    #[test]
    fn division_by_zero_propagates() {
        let mut rng = ScriptedSource::new().dice([4]);
        let result = evaluate("1d6/(2-2)", &mut rng);
        assert!(matches!(result, Err(DiceError::ArithmeticError(_))));
    }

    #[test]
    fn applies_suffix_to_each_roll() {
        let mut rng = ScriptedSource::new().dice([1, 4, 6]);
        let outcome = evaluate("3d6*2+1", &mut rng).unwrap();

        assert_eq!(outcome.rolls, vec![1, 4, 6]);
        assert_eq!(outcome.results, vec![3.0, 9.0, 13.0]);
        assert_eq!(outcome.total(), 25.0);
    }

    #[test]
    fn suffix_tokens_are_reused_between_rolls() {
        let spec = parse("2d10-(1+1)").unwrap();
        let before = spec.tokens.clone();

        let mut rng = ScriptedSource::new().dice([10, 5]);
        let outcome = roll(&spec, &mut rng).unwrap();

        assert_eq!(outcome.results, vec![8.0, 3.0]);
        assert_eq!(spec.tokens, before);
    }

    #[test]
    fn plain_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let outcome = evaluate("2d20", &mut rng).unwrap();
            assert_eq!(outcome.results.len(), 2);
            for value in &outcome.results {
                assert!((1.0..=20.0).contains(value));
                assert_eq!(value.fract(), 0.0);
            }
        }
    }

    #[test]
    fn modified_rolls_stay_in_shifted_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for count in 1..=10u32 {
            let outcome = evaluate(&format!("{count}d8*3-2"), &mut rng).unwrap();
            assert_eq!(outcome.results.len(), count as usize);
            for value in &outcome.results {
                assert!((1.0..=22.0).contains(value));
            }
        }
    }

    #[test]
    fn malformed_streams_fail_without_panicking() {
        use Operator::*;
        assert!(eval(&[]).is_err());
        assert!(eval(&[Token::Number(1.0), Token::Op(Add)]).is_err());
        assert!(eval(&[Token::Number(1.0), Token::RParen]).is_err());
        assert!(eval(&[Token::LParen, Token::Number(1.0)]).is_err());
        assert!(eval(&[Token::Number(1.0), Token::Number(2.0)]).is_err());
    }
}
