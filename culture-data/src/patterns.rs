//! Date and time pattern scanning: separators and short time derivation.
//!
//! Text in single quotes is literal (`''` is an escaped quote), as is any
//! character after a backslash.

/// Letters that delimit the time separator.
pub const TIME_LETTERS: &[char] = &['H', 'h', 'm', 's'];
/// Letters that delimit the date separator.
pub const DATE_LETTERS: &[char] = &['d', 'M', 'y'];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
	Field { letter: char, raw: String },
	Literal { raw: String, text: String },
}

fn tokenize(pattern: &str, letters: &[char]) -> Vec<Token> {
	let mut tokens = Vec::new();
	let mut raw = String::new();
	let mut text = String::new();
	let mut chars = pattern.chars().peekable();
	let flush = |tokens: &mut Vec<Token>, raw: &mut String, text: &mut String| {
		if !raw.is_empty() {
			tokens.push(Token::Literal { raw: std::mem::take(raw), text: std::mem::take(text) });
		}
	};
	while let Some(c) = chars.next() {
		match c {
			'\'' => {
				raw.push(c);
				if chars.peek() == Some(&'\'') {
					raw.push('\'');
					chars.next();
					text.push('\'');
					continue;
				}
				while let Some(q) = chars.next() {
					raw.push(q);
					if q == '\'' {
						if chars.peek() == Some(&'\'') {
							raw.push('\'');
							chars.next();
							text.push('\'');
							continue;
						}
						break;
					}
					text.push(q);
				}
			}
			'\\' => {
				raw.push(c);
				if let Some(escaped) = chars.next() {
					raw.push(escaped);
					text.push(escaped);
				}
			}
			c if letters.contains(&c) => {
				flush(&mut tokens, &mut raw, &mut text);
				let mut run = String::from(c);
				while chars.peek() == Some(&c) {
					run.push(c);
					chars.next();
				}
				tokens.push(Token::Field { letter: c, raw: run });
			}
			c => {
				raw.push(c);
				text.push(c);
			}
		}
	}
	flush(&mut tokens, &mut raw, &mut text);
	tokens
}

/// Literal text between the first field run and the next one.
///
/// ```
/// use culture_data::patterns::{separator_between, TIME_LETTERS};
/// assert_eq!(separator_between("HH' h 'mm", TIME_LETTERS).as_deref(), Some(" h "));
/// ```
pub fn separator_between(pattern: &str, letters: &[char]) -> Option<String> {
	let tokens = tokenize(pattern, letters);
	let first = tokens.iter().position(|t| matches!(t, Token::Field { .. }))?;
	match (tokens.get(first + 1), tokens.get(first + 2)) {
		(Some(Token::Literal { text, .. }), Some(Token::Field { .. })) if !text.is_empty() => Some(text.clone()),
		_ => None,
	}
}

/// Drop the seconds field, and the separator in front of it, from a long
/// time pattern.
pub fn short_time_from_long(pattern: &str) -> String {
	let mut tokens = tokenize(pattern, TIME_LETTERS);
	let Some(seconds) = tokens.iter().position(|t| matches!(t, Token::Field { letter: 's', .. })) else {
		return pattern.to_string();
	};
	tokens.remove(seconds);
	if seconds >= 2 && matches!(tokens[seconds - 1], Token::Literal { .. }) {
		tokens.remove(seconds - 1);
	} else if seconds == 0 && matches!(tokens.first(), Some(Token::Literal { .. })) {
		tokens.remove(0);
	}
	tokens
		.into_iter()
		.map(|t| match t {
			Token::Field { raw, .. } | Token::Literal { raw, .. } => raw,
		})
		.collect()
}
