use num::Float;

/// Fuzzy AND: the minimum of the operands. `None` when there are none.
pub fn and<F: Float>(memberships: impl IntoIterator<Item = F>) -> Option<F> {
    memberships.into_iter().reduce(F::min)
}

/// Fuzzy OR: the maximum of the operands. `None` when there are none.
pub fn or<F: Float>(memberships: impl IntoIterator<Item = F>) -> Option<F> {
    memberships.into_iter().reduce(F::max)
}

/// Mamdani implication: the consequence is truncated at the firing strength.
pub fn implication<F: Float>(
    firing_strength: F,
    consequence: impl IntoIterator<Item = F>,
) -> impl Iterator<Item = F> {
    consequence.into_iter().map(move |v| F::min(firing_strength, v))
}

/// Pointwise maximum, used to aggregate the consequences of the rules.
pub fn production_link<F: Float>(
    u: impl IntoIterator<Item = F>,
    v: impl IntoIterator<Item = F>,
) -> impl Iterator<Item = F> {
    u.into_iter().zip(v).map(|(u, v)| F::max(u, v))
}

#[test]
fn test_connectives() {
    assert_eq!(and([0.3, 0.9, 0.5]), Some(0.3));
    assert_eq!(or([0.3, 0.9, 0.5]), Some(0.9));
    assert_eq!(and(Vec::<f64>::new()), None);
    assert_eq!(or([0.4f32]), Some(0.4));
}

#[test]
fn test_implication_truncates() {
    let implied: Vec<f64> = implication(0.4, [0., 0.2, 0.4, 0.8, 1.]).collect();

    assert_eq!(implied, vec![0., 0.2, 0.4, 0.4, 0.4]);
}

#[test]
fn test_production_link() {
    let linked: Vec<f64> = production_link([0., 0.5, 1.], [0.25, 0.25, 0.75]).collect();

    assert_eq!(linked, vec![0.25, 0.5, 1.]);
}
