use crate::crypto::Fn;

/// Computes the Lagrange basis polynomials for `nodes`, each evaluated at
/// `x`: `basis[j] = Prod_{m != j} (x - nodes[m]) / (nodes[j] - nodes[m])`.
pub fn basis_at(nodes: &[Fn], x: &Fn) -> Vec<Fn> {
    let mut result = Vec::with_capacity(nodes.len());
    for (j, node_j) in nodes.iter().enumerate() {
        let mut term = Fn::one();
        for (m, node_m) in nodes.iter().enumerate() {
            if m == j {
                continue;
            }
            let numerator = x.subtract(node_m);
            let denominator = node_j.subtract(node_m);
            let inverse = denominator
                .invert()
                .expect("interpolation nodes must be pairwise distinct");
            term = term.multiply(&numerator.multiply(&inverse));
        }
        result.push(term);
    }
    result
}

/// Lagrange-interpolates `evaluations` (taken at `nodes`) at `x`.
pub fn interpolate_at(nodes: &[Fn], evaluations: &[Fn], x: &Fn) -> Fn {
    assert_eq!(
        nodes.len(),
        evaluations.len(),
        "one node is required per evaluation"
    );
    let basis = basis_at(nodes, x);
    evaluations
        .iter()
        .zip(basis.iter())
        .fold(Fn::zero(), |acc, (eval, coeff)| {
            acc.add(&eval.multiply(coeff))
        })
}

/// Reconstructs the secret at the constant term: `interpolate_at(nodes,
/// evaluations, 0)`.
pub fn open(nodes: &[Fn], evaluations: &[Fn]) -> Fn {
    interpolate_at(nodes, evaluations, &Fn::zero())
}
