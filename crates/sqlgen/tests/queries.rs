//! End-to-end coverage over the compiled query text and bind parameters.

use model::{
    audience::filter::{AudienceFilters, AudienceKind, ExperienceFilter, GeoLogic, ZipRegion},
    core::value::Value,
};
use sqlgen::taxonomy::TaxonomyTable;

const RN_BASE: &str = "SELECT \"First Name\" as fn, \"Last Name\" as ln, \"Email1\" as email, \
                       \"Telephone\" as phone, \"City\" as ct, \"State\" as st, \"Zip Code\" as zip \
                       FROM public.liveramp_rn_feed r WHERE 1=1";

const HCP_BASE: &str = "SELECT \"First Name\" as fn, \"Last Name\" as ln, \"Email1\" as email, \
                        \"Telephone\" as phone, \"City\" as ct, \"State\" as st, \"Zip Code\" as zip \
                        FROM public.liveramp_md_feed r WHERE 1=1";

const NYC_CTE: &str = "WITH radius_0 AS (SELECT DISTINCT z.geoid10 as zip_code FROM zip_shp z, \
                       (SELECT geom FROM zip_shp WHERE geoid10 = '10001') as center \
                       WHERE ST_DWithin(z.geom, center.geom, 10 * 1609.34, false)) ";

fn region(zip: &str, radius: f64) -> ZipRegion {
    ZipRegion {
        label: String::new(),
        zip: zip.to_string(),
        radius,
    }
}

#[test]
fn empty_filters_compile_to_bare_feed_scan() {
    assert_eq!(sqlgen::rn_query(&AudienceFilters::default()), RN_BASE);
    assert_eq!(sqlgen::hcp_query(&AudienceFilters::default()), HCP_BASE);
}

#[test]
fn specialties_emit_or_combined_flag_checks() {
    let filters = AudienceFilters {
        specialties: vec!["Cardiology".to_string(), "Oncology".to_string()],
        ..Default::default()
    };
    assert_eq!(
        sqlgen::rn_query(&filters),
        format!("{RN_BASE} AND (\"Cardiology\" = '1' OR \"Oncology\" = '1')")
    );
}

#[test]
fn valid_region_emits_cte_and_reference() {
    let filters = AudienceFilters {
        zip_regions: vec![region("10001", 10.0)],
        ..Default::default()
    };
    assert_eq!(
        sqlgen::rn_query(&filters),
        format!("{NYC_CTE}{RN_BASE} AND ((r.\"Zip Code\" IN (SELECT zip_code FROM radius_0)))")
    );
}

#[test]
fn invalid_region_is_skipped_silently() {
    let filters = AudienceFilters {
        zip_regions: vec![region("", 10.0)],
        ..Default::default()
    };
    // The only region is invalid, so no WITH clause appears at all.
    assert_eq!(sqlgen::rn_query(&filters), RN_BASE);
}

#[test]
fn cte_numbering_is_dense_over_valid_regions() {
    // Invalid regions in the middle of the list must not leave gaps in the
    // CTE numbering or the references would dangle.
    let filters = AudienceFilters {
        zip_regions: vec![region("10001", 10.0), region("", 5.0), region("94103", 25.0)],
        ..Default::default()
    };
    let sql = sqlgen::rn_query(&filters);
    assert!(sql.contains("radius_0 AS"));
    assert!(sql.contains("radius_1 AS"));
    assert!(!sql.contains("radius_2"));
    assert!(sql.contains(
        "(r.\"Zip Code\" IN (SELECT zip_code FROM radius_0) \
         OR r.\"Zip Code\" IN (SELECT zip_code FROM radius_1))"
    ));
}

#[test]
fn geo_logic_selects_the_inner_combinator() {
    let mut filters = AudienceFilters {
        states: vec!["CA".to_string()],
        zip_regions: vec![region("10001", 10.0)],
        geo_logic: GeoLogic::And,
        ..Default::default()
    };
    let expected_and = format!(
        "{NYC_CTE}{RN_BASE} AND (\"State\" IN ('CA') AND \
         (r.\"Zip Code\" IN (SELECT zip_code FROM radius_0)))"
    );
    assert_eq!(sqlgen::rn_query(&filters), expected_and);

    filters.geo_logic = GeoLogic::Or;
    assert_eq!(
        sqlgen::rn_query(&filters),
        expected_and.replace("IN ('CA') AND", "IN ('CA') OR")
    );
}

#[test]
fn states_only_emit_a_single_in_list() {
    let filters = AudienceFilters {
        states: vec!["CA".to_string(), "NY".to_string()],
        ..Default::default()
    };
    assert_eq!(
        sqlgen::rn_query(&filters),
        format!("{RN_BASE} AND (\"State\" IN ('CA','NY'))")
    );
}

#[test]
fn experience_filter_emits_only_nonzero_bounds() {
    let filters = AudienceFilters {
        experience_filter: Some(ExperienceFilter {
            min_years: 5,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(
        sqlgen::rn_query(&filters),
        format!("{RN_BASE} AND (\"Years of Experience\" >= 5)")
    );

    let filters = AudienceFilters {
        experience_filter: Some(ExperienceFilter {
            min_years: 2,
            max_years: 10,
            min_months: 0,
            max_months: 6,
        }),
        ..Default::default()
    };
    assert_eq!(
        sqlgen::rn_query(&filters),
        format!(
            "{RN_BASE} AND (\"Years of Experience\" >= 2 AND \"Years of Experience\" <= 10 \
             AND \"Months of Experience\" <= 6)"
        )
    );
}

#[test]
fn all_zero_experience_filter_is_a_noop() {
    let filters = AudienceFilters {
        experience_filter: Some(ExperienceFilter::default()),
        ..Default::default()
    };
    assert_eq!(sqlgen::rn_query(&filters), RN_BASE);
}

#[test]
fn hcp_never_emits_an_experience_clause() {
    let filters = AudienceFilters {
        experience_filter: Some(ExperienceFilter {
            min_years: 5,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(sqlgen::hcp_query(&filters), HCP_BASE);
}

#[test]
fn compilation_is_deterministic() {
    let filters = AudienceFilters {
        specialties: vec!["Cardiology".to_string()],
        states: vec!["CA".to_string(), "NY".to_string()],
        zip_regions: vec![region("10001", 10.0), region("94103", 25.0)],
        geo_logic: GeoLogic::And,
        experience_filter: Some(ExperienceFilter {
            min_years: 3,
            ..Default::default()
        }),
    };
    assert_eq!(sqlgen::rn_query(&filters), sqlgen::rn_query(&filters));
    assert_eq!(
        sqlgen::compile(AudienceKind::Rn, &filters),
        sqlgen::compile(AudienceKind::Rn, &filters)
    );
}

#[test]
fn bind_mode_collects_params_in_render_order() {
    let filters = AudienceFilters {
        specialties: vec!["Cardiology".to_string()],
        states: vec!["CA".to_string()],
        zip_regions: vec![region("10001", 10.0)],
        geo_logic: GeoLogic::And,
        experience_filter: Some(ExperienceFilter {
            min_years: 5,
            ..Default::default()
        }),
    };
    let query = sqlgen::compile(AudienceKind::Rn, &filters);

    // CTE literals come first, then specialty flags, states, experience.
    assert_eq!(
        query.params,
        vec![
            Value::from("10001"),
            Value::Float(10.0),
            Value::from("1"),
            Value::from("CA"),
            Value::Int(5),
        ]
    );
    assert!(query.sql.contains("geoid10 = $1"));
    assert!(query.sql.contains("center.geom, $2 * 1609.34"));
    assert!(query.sql.contains("\"Cardiology\" = $3"));
    assert!(query.sql.contains("\"State\" IN ($4)"));
    assert!(query.sql.contains("\"Years of Experience\" >= $5"));
}

#[test]
fn taxonomy_lookup_rewrites_specialty_columns() {
    let mut taxonomy = TaxonomyTable::default();
    taxonomy.insert("Cardiology", "207RC0000X");

    let filters = AudienceFilters {
        specialties: vec!["Cardiology".to_string()],
        ..Default::default()
    };
    let sql = sqlgen::compile_text_with(AudienceKind::Hcp, &filters, &taxonomy);
    assert_eq!(sql, format!("{HCP_BASE} AND (\"207RC0000X\" = '1')"));
}
