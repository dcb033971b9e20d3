//! Lowering of parsed statements into canonical expressions.

use canon_core::{func, ComparisonOperator, Equation, EquationSystem, Expr};
use canon_error::Error;
use canon_parser::parser::{
    ast::{self, Literal, Stmt},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::error::{
    from_core,
    AssignToConstant,
    ExpectedComparison,
    ExpectedExpression,
    UnknownFunction,
    WrongArgumentCount,
};
use levenshtein::levenshtein;
use std::{collections::HashMap, fmt};
use tracing::debug;

/// The built-in functions and the number of arguments each takes.
const FUNCTIONS: [(&str, usize); 8] = [
    ("sin", 1),
    ("cos", 1),
    ("tan", 1),
    ("ln", 1),
    ("abs", 1),
    ("sqrt", 1),
    ("exp", 1),
    ("root", 2),
];

/// The result of evaluating an expression statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A canonical expression.
    Expr(Expr),

    /// A comparison, or a combination of comparisons.
    System(EquationSystem),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Expr(expr) => expr.fmt(f),
            Value::System(system) => system.fmt(f),
        }
    }
}

/// Returns the constant a name refers to, if any.
fn constant(name: &str) -> Option<Expr> {
    match name {
        "pi" | "π" => Some(Expr::pi()),
        "e" => Some(Expr::e()),
        "i" => Some(Expr::i()),
        _ => None,
    }
}

/// Returns the comparison operator for a binary operator, if it is a comparison.
fn comparison(kind: BinOpKind) -> Option<ComparisonOperator> {
    Some(match kind {
        BinOpKind::Eq => ComparisonOperator::EqualTo,
        BinOpKind::NotEq => ComparisonOperator::NotEqualTo,
        BinOpKind::Less => ComparisonOperator::LessThan,
        BinOpKind::LessEq => ComparisonOperator::LessThanOrEqualTo,
        BinOpKind::Greater => ComparisonOperator::GreaterThan,
        BinOpKind::GreaterEq => ComparisonOperator::GreaterThanOrEqualTo,
        _ => return None,
    })
}

/// The evaluation context: variables bound by earlier assignments.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    bindings: HashMap<String, Expr>,
}

impl Ctxt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the expression bound to a variable, if any.
    pub fn get_var(&self, name: &str) -> Option<&Expr> {
        self.bindings.get(name)
    }

    /// Evaluates a statement. Assignments bind a variable and produce no value.
    pub fn eval_stmt(&mut self, stmt: &Stmt) -> Result<Option<Value>, Error> {
        match stmt {
            Stmt::Assign(assign) => {
                let name = &assign.target.name;
                if constant(name).is_some() {
                    return Err(Error::new(
                        vec![assign.target.span.clone()],
                        AssignToConstant { name: name.clone() },
                    ));
                }

                let value = self.lower_expr(&assign.value)?;
                debug!(%name, %value, "binding variable");
                self.bindings.insert(name.clone(), value);
                Ok(None)
            },
            Stmt::Expr(expr) => self.lower(expr).map(Some),
        }
    }

    /// Evaluates every statement in order, returning the value of each expression statement.
    /// Evaluation stops at the first error.
    pub fn eval_stmts(&mut self, stmts: &[Stmt]) -> Result<Vec<Value>, Error> {
        let mut values = Vec::new();
        for stmt in stmts {
            if let Some(value) = self.eval_stmt(stmt)? {
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Lowers a syntax tree into a value.
    pub fn lower(&self, expr: &ast::Expr) -> Result<Value, Error> {
        match expr {
            ast::Expr::Literal(Literal::Integer(int)) => Ok(Value::Expr(Expr::number(int.value))),
            ast::Expr::Literal(Literal::Decimal(decimal)) => Expr::from_decimal_str(&decimal.value)
                .map(Value::Expr)
                .map_err(|err| from_core(err, decimal.span.clone())),
            ast::Expr::Literal(Literal::Symbol(sym)) => {
                if let Some(constant) = constant(&sym.name) {
                    return Ok(Value::Expr(constant));
                }
                match self.bindings.get(&sym.name) {
                    Some(bound) => Ok(Value::Expr(bound.clone())),
                    None => Expr::variable(sym.name.as_str())
                        .map(Value::Expr)
                        .map_err(|err| from_core(err, sym.span.clone())),
                }
            },
            ast::Expr::Paren(paren) => self.lower(&paren.expr),
            ast::Expr::Call(call) => self.lower_call(call).map(Value::Expr),
            ast::Expr::Unary(unary) => {
                let operand = self.lower_expr(&unary.operand)?;
                let result = match unary.op.kind {
                    UnaryOpKind::Neg => operand.try_neg(),
                };
                result.map(Value::Expr).map_err(|err| from_core(err, unary.span()))
            },
            ast::Expr::Binary(binary) => self.lower_binary(binary),
        }
    }

    /// Lowers a syntax tree that must be an expression, not a comparison.
    pub fn lower_expr(&self, expr: &ast::Expr) -> Result<Expr, Error> {
        match self.lower(expr)? {
            Value::Expr(expr) => Ok(expr),
            Value::System(_) => Err(Error::new(vec![expr.span()], ExpectedExpression)),
        }
    }

    /// Lowers a syntax tree that must be a comparison or a combination of comparisons.
    pub fn lower_system(&self, expr: &ast::Expr) -> Result<EquationSystem, Error> {
        match self.lower(expr)? {
            Value::System(system) => Ok(system),
            Value::Expr(_) => Err(Error::new(vec![expr.span()], ExpectedComparison)),
        }
    }

    fn lower_binary(&self, binary: &ast::Binary) -> Result<Value, Error> {
        let kind = binary.op.kind;
        if kind.is_logical() {
            let lhs = self.lower_system(&binary.lhs)?;
            let rhs = self.lower_system(&binary.rhs)?;
            let system = match kind {
                BinOpKind::And => lhs & rhs,
                BinOpKind::Or => lhs | rhs,
                _ => unreachable!("only `&&` and `||` are logical operators"),
            };
            return Ok(Value::System(system));
        }

        let lhs = self.lower_expr(&binary.lhs)?;
        let rhs = self.lower_expr(&binary.rhs)?;
        if let Some(op) = comparison(kind) {
            return Ok(Value::System(Equation::new(op, lhs, rhs).into()));
        }

        let result = match kind {
            BinOpKind::Add => lhs.try_add(&rhs),
            BinOpKind::Sub => lhs.try_sub(&rhs),
            BinOpKind::Mul => lhs.try_mul(&rhs),
            BinOpKind::Div => lhs.try_div(&rhs),
            BinOpKind::Exp => lhs.try_pow(&rhs),
            _ => unreachable!("comparison and logical operators were handled above"),
        };
        result.map(Value::Expr).map_err(|err| {
            // a zero divisor is the divisor's fault, not the whole quotient's
            let span = match (&err, kind) {
                (canon_core::Error::DivideByZero, BinOpKind::Div) => binary.rhs.span(),
                _ => binary.span(),
            };
            from_core(err, span)
        })
    }

    fn lower_call(&self, call: &ast::Call) -> Result<Expr, Error> {
        let name = call.name.name.as_str();
        let Some(&(_, expected)) = FUNCTIONS.iter().find(|(func, _)| *func == name) else {
            let mut suggestions = FUNCTIONS.iter()
                .map(|(func, _)| (levenshtein(func, name), *func))
                .filter(|(distance, _)| *distance < 2)
                .collect::<Vec<_>>();
            suggestions.sort();
            return Err(Error::new(call.outer_span().to_vec(), UnknownFunction {
                name: name.to_string(),
                suggestions: suggestions.into_iter().map(|(_, func)| func.to_string()).collect(),
            }));
        };

        if call.args.len() != expected {
            return Err(Error::new(call.outer_span().to_vec(), WrongArgumentCount {
                name: name.to_string(),
                expected,
                given: call.args.len(),
            }));
        }

        let args = call.args.iter()
            .map(|arg| self.lower_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;
        let result = match (name, args.as_slice()) {
            ("sin", [x]) => func::sin(x),
            ("cos", [x]) => func::cos(x),
            ("tan", [x]) => func::tan(x),
            ("ln", [x]) => func::ln(x),
            ("abs", [x]) => func::abs(x),
            ("sqrt", [x]) => func::sqrt(x),
            ("exp", [x]) => func::exp(x),
            ("root", [x, n]) => func::root(x, n),
            _ => unreachable!("argument count was checked against the function table"),
        };
        result.map_err(|err| from_core(err, call.span()))
    }
}
