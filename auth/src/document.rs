//! National tax-identifier validation.
//!
//! Supports the two Brazilian identifier formats: CPF (11 digits, natural
//! persons) and CNPJ (14 digits, legal entities). Both end in two
//! verification digits computed from weighted sums modulo 11.

const CPF_WEIGHTS_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a possibly punctuated tax identifier.
///
/// Every non-digit character is stripped before validation, so formatted
/// inputs ("529.982.247-25", "11.222.333/0001-81") are accepted. Callers
/// that use the identifier for lookups should keep passing the original
/// string; this function only decides validity.
///
/// # Returns
/// True when the cleaned string is an 11-digit CPF or 14-digit CNPJ with
/// matching verification digits. Any other length is invalid.
pub fn is_valid(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    match digits.len() {
        11 => is_valid_cpf(&digits),
        14 => is_valid_cnpj(&digits),
        _ => false,
    }
}

/// Weighted sum modulo 11 with the shared remainder-to-digit rule.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

fn all_identical(digits: &[u32]) -> bool {
    digits.iter().all(|&d| d == digits[0])
}

fn is_valid_cpf(digits: &[u32]) -> bool {
    // Sequences like 111.111.111-11 satisfy the checksum but are reserved
    if all_identical(digits) {
        return false;
    }

    let first = check_digit(&digits[..9], &CPF_WEIGHTS_FIRST);

    let mut prefix = digits[..9].to_vec();
    prefix.push(first);
    let second = check_digit(&prefix, &CPF_WEIGHTS_SECOND);

    digits[9] == first && digits[10] == second
}

fn is_valid_cnpj(digits: &[u32]) -> bool {
    if all_identical(digits) {
        return false;
    }

    let first = check_digit(&digits[..12], &CNPJ_WEIGHTS_FIRST);

    let mut prefix = digits[..12].to_vec();
    prefix.push(first);
    let second = check_digit(&prefix, &CNPJ_WEIGHTS_SECOND);

    digits[12] == first && digits[13] == second
}
