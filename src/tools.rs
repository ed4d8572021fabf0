//! Some helper functions

/// Reflected binary (Gray) code sequence over a number of bits.
///
/// Two successive values of the sequence differ by exactly one bit,
/// which is also the case for the last and first values.
///
/// ```
/// # use qmkit::tools::gray_code;
/// assert_eq!(gray_code(2), vec![0b00, 0b01, 0b11, 0b10]);
/// assert_eq!(gray_code(0), vec![0]);
/// ```
pub fn gray_code(bits: usize) -> Vec<usize> {
    (0..1usize << bits).map(|i| i ^ (i >> 1)).collect()
}

/// Gray code sequence rendered as fixed-width binary labels
///
/// ```
/// # use qmkit::tools::gray_labels;
/// assert_eq!(gray_labels(1), vec!["0", "1"]);
/// assert_eq!(gray_labels(2), vec!["00", "01", "11", "10"]);
/// ```
pub fn gray_labels(bits: usize) -> Vec<String> {
    gray_code(bits)
        .into_iter()
        .map(|v| binary_label(v, bits))
        .collect()
}

/// Render the lowest bits of a value, most significant first
pub fn binary_label(value: usize, bits: usize) -> String {
    (0..bits)
        .rev()
        .map(|i| if (value >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bit_steps() {
        for bits in 1..6 {
            let code = gray_code(bits);
            assert_eq!(code.len(), 1 << bits);
            for (i, v) in code.iter().enumerate() {
                let next = code[(i + 1) % code.len()];
                assert_eq!((v ^ next).count_ones(), 1);
            }
            let mut sorted = code.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..1 << bits).collect::<Vec<_>>());
        }
    }

    #[test]
    fn labels() {
        assert_eq!(binary_label(5, 4), "0101");
        assert_eq!(binary_label(0, 0), "");
        assert_eq!(
            gray_labels(3),
            vec!["000", "001", "011", "010", "110", "111", "101", "100"]
        );
    }
}
