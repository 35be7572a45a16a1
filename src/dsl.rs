use crate::variable::{Variable, VariableKey};

/// Identifies one term of one variable.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TermRef {
    pub(crate) variable: VariableKey,
    pub(crate) term: String,
}

impl TermRef {
    pub fn variable(&self) -> Variable {
        Variable(self.variable)
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

/// A rule premise. `And` takes the minimum of its operands, `Or` the maximum.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Is(TermRef),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    pub fn or(self, rhs: Expr) -> Self {
        match self {
            Expr::Or(mut exprs) => {
                exprs.push(rhs);
                Expr::Or(exprs)
            },
            lhs => Expr::Or(vec![lhs, rhs]),
        }
    }

    pub fn and(self, rhs: Expr) -> Self {
        match self {
            Expr::And(mut exprs) => {
                exprs.push(rhs);
                Expr::And(exprs)
            },
            lhs => Expr::And(vec![lhs, rhs]),
        }
    }

    pub fn all(exprs: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(exprs.into_iter().collect())
    }

    pub fn any(exprs: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(exprs.into_iter().collect())
    }

    /// Every term the expression mentions, in order, duplicates included.
    pub fn propositions(&self) -> Vec<&TermRef> {
        let mut props = Vec::new();

        fn parse<'p>(expr: &'p Expr, out: &mut Vec<&'p TermRef>) {
            match expr {
                Expr::Is(term_ref) => out.push(term_ref),
                Expr::And(exprs) | Expr::Or(exprs) => {
                    for expr in exprs {
                        parse(expr, out);
                    }
                },
            }
        }

        parse(self, &mut props);

        props
    }
}

impl Variable {
    pub fn term(self, term: impl Into<String>) -> TermRef {
        TermRef {
            variable: self.0,
            term: term.into(),
        }
    }

    pub fn is(self, term: impl Into<String>) -> Expr {
        Expr::Is(self.term(term))
    }
}

#[test]
fn test_builders_flatten() {
    let mut vars = crate::Variables::<f64>::new();
    let service = vars.add("service", 0. ..=10., crate::Terms::new(), None).unwrap();
    let food = vars.add("food", 0. ..=10., crate::Terms::new(), None).unwrap();

    let expr = service.is("poor").or(food.is("rancid")).or(food.is("burnt"));

    let Expr::Or(ref exprs) = expr else {
        panic!("expected a flat or, got {expr:?}");
    };
    assert_eq!(exprs.len(), 3);

    let expr = service.is("good").and(food.is("delicious").or(food.is("rancid")));
    let props: Vec<_> = expr.propositions().into_iter().map(TermRef::term).collect();

    assert_eq!(props, ["good", "delicious", "rancid"]);
}
