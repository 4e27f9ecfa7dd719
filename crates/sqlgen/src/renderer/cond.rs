use crate::{
    ast::{
        common::Ident,
        cond::{Compare, CompareOp, Cond},
    },
    renderer::{Render, Renderer},
};

impl Render for Cond {
    fn render(&self, r: &mut Renderer) {
        match self {
            Cond::Compare(compare) => compare.render(r),
            Cond::InList { column, values } => {
                column.render(r);
                r.sql.push_str(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        r.sql.push(',');
                    }
                    r.add_param(value.clone());
                }
                r.sql.push(')');
            }
            Cond::InCte { column, cte } => {
                column.render(r);
                r.sql.push_str(" IN (SELECT zip_code FROM ");
                r.sql.push_str(cte);
                r.sql.push(')');
            }
            Cond::Group(inner) => {
                r.sql.push('(');
                inner.render(r);
                r.sql.push(')');
            }
            Cond::Combine { op, conds } => {
                for (i, cond) in conds.iter().enumerate() {
                    if i > 0 {
                        r.sql.push(' ');
                        r.sql.push_str(op.keyword());
                        r.sql.push(' ');
                    }
                    cond.render(r);
                }
            }
        }
    }
}

impl Render for Compare {
    fn render(&self, r: &mut Renderer) {
        self.column.render(r);

        let op_str = match self.op {
            CompareOp::Eq => " = ",
            CompareOp::Lt => " < ",
            CompareOp::LtEq => " <= ",
            CompareOp::Gt => " > ",
            CompareOp::GtEq => " >= ",
        };
        r.sql.push_str(op_str);

        r.add_param(self.value.clone());
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        // The qualifier is a table alias, rendered bare: r."Zip Code".
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(qualifier);
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}
