use crate::{
    ast::query::{AudienceQuery, METERS_PER_MILE, RadiusCte, SelectColumn},
    renderer::{Render, Renderer},
};
use model::core::value::Value;

impl Render for AudienceQuery {
    fn render(&self, r: &mut Renderer) {
        // 1. WITH preamble, only when at least one radius CTE exists
        if !self.ctes.is_empty() {
            r.sql.push_str("WITH ");
            for (i, cte) in self.ctes.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                cte.render(r);
            }
            r.sql.push(' ');
        }

        // 2. SELECT projection
        r.sql.push_str("SELECT ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        // 3. FROM feed table; schema and alias are fixed internal names,
        //    rendered unquoted
        r.sql.push_str(" FROM ");
        if let Some(schema) = &self.from.schema {
            r.sql.push_str(schema);
            r.sql.push('.');
        }
        r.sql.push_str(&self.from.name);
        r.sql.push(' ');
        r.sql.push_str(&self.alias);

        // 4. WHERE with the always-true base, each clause AND-ed on
        r.sql.push_str(" WHERE 1=1");
        for clause in &self.clauses {
            r.sql.push_str(" AND (");
            clause.render(r);
            r.sql.push(')');
        }
    }
}

impl Render for SelectColumn {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&r.dialect.quote_identifier(&self.column));
        r.sql.push_str(" as ");
        r.sql.push_str(&self.alias);
    }
}

impl Render for RadiusCte {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push_str(
            " AS (SELECT DISTINCT z.geoid10 as zip_code FROM zip_shp z, \
             (SELECT geom FROM zip_shp WHERE geoid10 = ",
        );
        r.add_param(Value::String(self.center_zip.clone()));
        r.sql.push_str(") as center WHERE ST_DWithin(z.geom, center.geom, ");
        r.add_param(Value::Float(self.radius_miles));
        r.sql.push_str(" * ");
        r.sql.push_str(&METERS_PER_MILE.to_string());
        r.sql.push_str(", false))");
    }
}
