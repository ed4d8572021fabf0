use qmkit::*;

fn terms(t: &[usize]) -> TermSet {
    t.iter().copied().collect()
}

fn patterns<'a>(it: impl IntoIterator<Item = &'a Implicant>) -> Vec<String> {
    it.into_iter().map(|p| p.to_string()).collect()
}

#[test]
fn conjunction_sop() -> Result<(), QmError> {
    let vars: VarList = "a, b".parse()?;
    let result = minimize(parse_expression("a AND b", &vars)?, &vars)?;
    assert_eq!(result.sop().terms(), &terms(&[3]));
    assert_eq!(patterns(result.prime_implicants()), vec!["11"]);
    assert_eq!(result.formatted_sop(), "(a ∧ b)");
    Ok(())
}

#[test]
fn conjunction_pos() -> Result<(), QmError> {
    let vars: VarList = "a, b".parse()?;
    let result = minimize(parse_expression("a AND b", &vars)?, &vars)?;
    assert_eq!(result.pos().terms(), &terms(&[0, 1, 2]));
    assert_eq!(result.canonical_pos(), "(a ∨ b) ∧ (a ∨ ¬b) ∧ (¬a ∨ b)");
    assert_eq!(result.formatted_pos(), "(a) ∧ (b)");
    Ok(())
}

#[test]
fn tautology() -> Result<(), QmError> {
    let vars: VarList = "a".parse()?;
    let result = minimize(parse_expression("a OR NOT a", &vars)?, &vars)?;
    assert_eq!(result.sop().terms(), &terms(&[0, 1]));
    assert_eq!(patterns(result.prime_implicants()), vec!["-"]);
    assert_eq!(result.formatted_sop(), "1");
    assert!(result.pos().primes().is_empty());
    assert_eq!(result.formatted_pos(), "1");
    Ok(())
}

#[test]
fn cyclic_cover() -> Result<(), QmError> {
    let vars: VarList = "a b c".parse()?;
    let target = terms(&[0, 1, 2, 5, 6, 7]);
    let result = minimize(target.clone(), &vars)?;

    assert_eq!(
        patterns(result.prime_implicants()),
        vec!["00-", "0-0", "11-", "1-1", "-01", "-10"]
    );
    // No prime is essential: all picks are greedy, ties go to the lowest pattern
    let cover = result.essential_cover();
    assert_eq!(cover.essentials().count(), 0);
    assert_eq!(patterns(cover.iter()), vec!["00-", "0-0", "11-", "1-1"]);
    assert_eq!(cover.covered_terms(), target);
    Ok(())
}

#[test]
fn contradiction() -> Result<(), QmError> {
    let vars: VarList = "a b".parse()?;
    let result = minimize(parse_expression("a & !a & b", &vars)?, &vars)?;
    assert!(result.prime_implicants().is_empty());
    assert!(result.essential_cover().is_empty());
    assert_eq!(result.formatted_sop(), "0");
    assert_eq!(result.formatted_pos(), "0");
    Ok(())
}

#[test]
fn full_term_set() -> Result<(), QmError> {
    let vars: VarList = "a b c".parse()?;
    let result = minimize(TermSet::full(3), &vars)?;
    assert_eq!(patterns(result.prime_implicants()), vec!["---"]);
    assert_eq!(result.formatted_sop(), "1");
    Ok(())
}

#[test]
fn no_variables() -> Result<(), QmError> {
    let vars = VarList::new();
    let result = minimize(Expr::from(true), &vars)?;
    assert_eq!(result.sop().terms(), &terms(&[0]));
    assert_eq!(result.prime_implicants().len(), 1);
    assert_eq!(result.formatted_sop(), "1");

    let result = minimize(Expr::from(false), &vars)?;
    assert_eq!(result.formatted_sop(), "0");
    assert_eq!(result.formatted_pos(), "0");
    Ok(())
}

#[test]
fn derived_operators() -> Result<(), QmError> {
    let (expr, vars) = parse_with_inferred_variables("(a -> b) & (b <-> c)")?;
    assert_eq!(vars.names(), &["a", "b", "c"]);
    let result = minimize(expr, &vars)?;
    assert_eq!(result.sop().terms(), &terms(&[0, 3, 7]));
    assert_eq!(result.formatted_sop(), "(¬a ∧ ¬b ∧ ¬c) ∨ (b ∧ c)");
    Ok(())
}

#[test]
fn merge_stages() -> Result<(), QmError> {
    let vars: VarList = "a b c".parse()?;
    let result = minimize(terms(&[0, 1, 2, 3, 7]), &vars)?;
    let stages = result.sop().stages();
    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0].candidates.len(), 5);
    assert_eq!(patterns(&stages[2].primes), vec!["0--"]);
    assert_eq!(patterns(result.prime_implicants()), vec!["0--", "-11"]);
    Ok(())
}

#[test]
fn errors() -> Result<(), QmError> {
    let vars: VarList = "a b".parse()?;
    assert_eq!(
        parse_expression("a & c", &vars),
        Err(QmError::Parse(ParseError::UndeclaredVariable("c".to_string())))
    );
    assert_eq!(
        parse_expression("a |", &vars),
        Err(QmError::Arity {
            operator: "OR".to_string()
        })
    );
    assert!(matches!(
        parse_expression("a $ b", &vars),
        Err(QmError::Parse(ParseError::InvalidToken { found: '$', .. }))
    ));

    let many: VarList = "a b c d e f g".parse()?;
    assert_eq!(
        minimize(TermSet::new(), &many),
        Err(QmError::TooManyVariables { count: 7, max: 6 })
    );
    assert_eq!(
        minimize(terms(&[4]), &vars),
        Err(QmError::UncoverableTerm(4))
    );
    assert_eq!(
        karnaugh_layout(&"a".parse()?),
        Err(QmError::UnsupportedVariableCount(1))
    );
    Ok(())
}

#[test]
fn karnaugh_map() -> Result<(), QmError> {
    let vars: VarList = "a b c d".parse()?;
    let result = minimize(parse_expression("a & c | !b & !d", &vars)?, &vars)?;
    let map = KarnaughMap::new(result.table())?;
    assert_eq!(map.row_labels(), &["00", "01", "11", "10"]);
    // ab = 00, cd = 00
    assert_eq!(map.cell(0, 0), Some(true));
    // ab = 11, cd = 11
    assert_eq!(map.cell(2, 2), Some(true));
    // ab = 01, cd = 01
    assert_eq!(map.cell(1, 1), Some(false));
    Ok(())
}
