//! Formatting API for implicants and normal forms

use crate::*;

use std::fmt;

/// Symbols used to display normal forms.
#[derive(Debug)]
pub struct FormatterConfig<'a> {
    s_and: &'a str,
    s_or: &'a str,
    s_implies: &'a str,
    s_iff: &'a str,
    s_not: &'a str,
    s_true: &'a str,
    s_false: &'a str,
}

pub static UNICODE_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " ∧ ",
    s_or: " ∨ ",
    s_implies: " → ",
    s_iff: " ↔ ",
    s_not: "¬",
    s_true: "1",
    s_false: "0",
};

pub static ASCII_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " & ",
    s_or: " | ",
    s_implies: " -> ",
    s_iff: " <-> ",
    s_not: "!",
    s_true: "1",
    s_false: "0",
};

/// The normal form used to read a list of implicants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Form {
    /// Sum of products: each implicant is a conjunction covering some minterms
    Sop,
    /// Product of sums: each implicant is a disjunction excluding some maxterms
    Pos,
}

impl Form {
    /// Operator joining the literals of a single implicant
    pub fn inner(self) -> Operator {
        match self {
            Form::Sop => Operator::And,
            Form::Pos => Operator::Or,
        }
    }

    /// Operator joining the implicants
    pub fn outer(self) -> Operator {
        match self {
            Form::Sop => Operator::Or,
            Form::Pos => Operator::And,
        }
    }
}

/// Display an implicant as a conjunction (SOP) or disjunction (POS) of literals.
///
/// In a product of sums, the polarity of literals is inverted: a position fixed at
/// ```1``` gives a negated literal. The universal implicant gives an empty string.
pub struct FormattedImplicant<'a> {
    implicant: &'a Implicant,
    variables: &'a VarList,
    form: Form,
    cfg: &'a FormatterConfig<'a>,
}

/// Display a list of implicants as a complete normal form.
///
/// Each implicant is enclosed in parenthesis. The constant functions are displayed
/// as ```0``` or ```1```: an empty sum of products is always false, an empty product of sums
/// is always true, and a universal implicant absorbs all others.
pub struct FormattedCover<'a> {
    implicants: Vec<&'a Implicant>,
    variables: &'a VarList,
    form: Form,
    cfg: &'a FormatterConfig<'a>,
}

impl FormatterConfig<'_> {
    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
            Operator::Implies => self.s_implies,
            Operator::Iff => self.s_iff,
        }
    }

    pub fn constant(&self, b: bool) -> &str {
        match b {
            true => self.s_true,
            false => self.s_false,
        }
    }

    pub fn implicant<'a>(
        &'a self,
        implicant: &'a Implicant,
        variables: &'a VarList,
        form: Form,
    ) -> FormattedImplicant<'a> {
        FormattedImplicant {
            implicant,
            variables,
            form,
            cfg: self,
        }
    }

    pub fn cover<'a>(
        &'a self,
        implicants: impl IntoIterator<Item = &'a Implicant>,
        variables: &'a VarList,
        form: Form,
    ) -> FormattedCover<'a> {
        FormattedCover {
            implicants: implicants.into_iter().collect(),
            variables,
            form,
            cfg: self,
        }
    }
}

impl fmt::Display for FormattedImplicant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let positive = self.form == Form::Sop;
        for (i, (var, value)) in self.implicant.iter_fixed_values().enumerate() {
            if i > 0 {
                write!(f, "{}", self.cfg.operator(self.form.inner()))?;
            }
            if value != positive {
                write!(f, "{}", self.cfg.s_not)?;
            }
            match self.variables.name(var) {
                Some(name) => write!(f, "{}", name)?,
                None => write!(f, "{}", var)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for FormattedCover<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let is_sop = self.form == Form::Sop;
        if self.implicants.is_empty() {
            return write!(f, "{}", self.cfg.constant(!is_sop));
        }
        if self.implicants.iter().any(|p| p.is_universal()) {
            return write!(f, "{}", self.cfg.constant(is_sop));
        }
        for (i, p) in self.implicants.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.cfg.operator(self.form.outer()))?;
            }
            write!(f, "({})", self.cfg.implicant(p, self.variables, self.form))?;
        }
        Ok(())
    }
}

/// Display an implicant with the default (unicode) symbols
pub fn format_implicant(implicant: &Implicant, variables: &VarList, form: Form) -> String {
    UNICODE_FMT_CFG
        .implicant(implicant, variables, form)
        .to_string()
}

/// Display a list of implicants with the default (unicode) symbols
pub fn format_cover<'a>(
    implicants: impl IntoIterator<Item = &'a Implicant>,
    variables: &'a VarList,
    form: Form,
) -> String {
    UNICODE_FMT_CFG.cover(implicants, variables, form).to_string()
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn pattern(s: &str) -> Implicant {
        s.parse().unwrap()
    }

    #[test]
    fn implicants() -> Result<(), QmError> {
        let vars: VarList = "a b c".parse()?;
        let p = pattern("1-0");
        assert_eq!(format_implicant(&p, &vars, Form::Sop), "a ∧ ¬c");
        assert_eq!(format_implicant(&p, &vars, Form::Pos), "¬a ∨ c");
        assert_eq!(
            ASCII_FMT_CFG.implicant(&p, &vars, Form::Sop).to_string(),
            "a & !c"
        );
        assert_eq!(format_implicant(&pattern("000"), &vars, Form::Sop), "¬a ∧ ¬b ∧ ¬c");
        assert_eq!(format_implicant(&pattern("---"), &vars, Form::Sop), "");
        assert_eq!(format_implicant(&pattern("---"), &vars, Form::Pos), "");
        Ok(())
    }

    #[test]
    fn covers() -> Result<(), QmError> {
        let vars: VarList = "a b".parse()?;
        let sop = [pattern("11")];
        assert_eq!(format_cover(&sop, &vars, Form::Sop), "(a ∧ b)");

        let pos = [pattern("00"), pattern("01"), pattern("10")];
        assert_eq!(
            format_cover(&pos, &vars, Form::Pos),
            "(a ∨ b) ∧ (a ∨ ¬b) ∧ (¬a ∨ b)"
        );
        assert_eq!(
            ASCII_FMT_CFG.cover(&pos, &vars, Form::Pos).to_string(),
            "(a | b) & (a | !b) & (!a | b)"
        );
        Ok(())
    }

    #[test]
    fn operators() {
        assert_eq!(UNICODE_FMT_CFG.operator(Operator::And), " ∧ ");
        assert_eq!(UNICODE_FMT_CFG.operator(Operator::Implies), " → ");
        assert_eq!(UNICODE_FMT_CFG.operator(Operator::Iff), " ↔ ");
        assert_eq!(ASCII_FMT_CFG.operator(Operator::Or), " | ");
        assert_eq!(ASCII_FMT_CFG.operator(Operator::Implies), " -> ");
        assert_eq!(ASCII_FMT_CFG.operator(Operator::Iff), " <-> ");

        for cfg in [&UNICODE_FMT_CFG, &ASCII_FMT_CFG] {
            for form in [Form::Sop, Form::Pos] {
                assert!(!cfg.operator(form.inner()).trim().is_empty());
                assert_ne!(cfg.operator(form.inner()), cfg.operator(form.outer()));
            }
        }
    }

    #[test]
    fn constants() -> Result<(), QmError> {
        let vars: VarList = "a".parse()?;
        let none: [Implicant; 0] = [];
        assert_eq!(format_cover(&none, &vars, Form::Sop), "0");
        assert_eq!(format_cover(&none, &vars, Form::Pos), "1");

        let all = [pattern("-")];
        assert_eq!(format_cover(&all, &vars, Form::Sop), "1");
        assert_eq!(format_cover(&all, &vars, Form::Pos), "0");
        Ok(())
    }
}
