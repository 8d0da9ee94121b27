use std::path::PathBuf;

use fleet_budget_reconciliation::{
    datasources::{CsvSnapshotDatasource, CsvTables},
    entities::{
        Account, AdjustmentPolicy, DetailQuery, ReconciliationConfig, ReportingContext, Vessel,
    },
    reports::{to_csv, to_json},
    util::BudgetReconciliationUtil,
};

fn aurora() -> Vessel {
    Vessel::new("V1", "Aurora", "North")
}

fn tables() -> CsvTables {
    CsvTables {
        budgets: "vessel,year,account,month,amount\n\
                  V1,2025,Casco,Ene,400\n\
                  V1,2025,Hull,Mar,\"1,000\"\n\
                  V1,2025,Lubricants,3,200\n\
                  V1,2024,Hull,Mar,7777\n\
                  V2,2025,Hull,Mar,8888\n"
            .to_string(),
        orders: "reference_id,vessel,account,title\n\
                 OC-1,V1,Hull,Antifouling paint\n\
                 OC-2,V1,Lubricants,Engine oil\n\
                 OC-3,V2,Hull,Borealis paint\n"
            .to_string(),
        assistance: "reference_id,vessel,account,title\n\
                     AT-1,V1,Electrónica,Radar service\n"
            .to_string(),
        order_quotes: "parent_reference_id,vendor,value,invoice_value,status,acceptance_date\n\
                       OC-1,Marine Coatings,300,,accepted,2025-03-15\n\
                       OC-1,Pricey Yard,9999,,pending,2025-03-10\n\
                       OC-2,Oil Co,180,210,Aceptada,2025-02-11T08:30:00Z\n\
                       OC-3,Marine Coatings,700,,accepted,2025-03-01\n"
            .to_string(),
        assistance_quotes: "parent_reference_id,vendor,value,invoice_value,status,acceptance_date\n\
                            AT-1,Radar Co,(50),,accepted,2025-03-02\n"
            .to_string(),
        fixed_charges: "vessel,year,account,label,kind,origin,Ene,Feb,Mar\n\
                        V1,2025,Hull,Class fees,Fixed,Orders,10,10,150\n\
                        V1,2025,Hull,Dry dock,Planned,Assistance,,,500\n"
            .to_string(),
        adjustments: "vessel_name,year,account,month,value\n\
                      Aurora,2025,Lubricants,Febrero,40\n\
                      Aurora,2025,Lubricants,Abril,999\n\
                      Borealis,2025,Hull,Feb,555\n"
            .to_string(),
    }
}

#[tokio::test]
async fn monthly_report_from_csv_tables() {
    let datasource = CsvSnapshotDatasource::from_tables(&tables()).unwrap();
    let util = BudgetReconciliationUtil::new(datasource);

    let report = util.compute_monthly(&aurora(), 2025, 3).await.unwrap();
    let accounts: Vec<&Account> = report.rows.iter().map(|r| &r.account).collect();
    assert_eq!(
        accounts,
        vec![&Account::Hull, &Account::Electronics, &Account::Lubricants]
    );

    let hull = &report.rows[0];
    assert_eq!(hull.budget, 1000.0);
    assert_eq!(hull.actual, 300.0);
    assert_eq!(hull.balance, 700.0);
    assert_eq!(hull.fixed_informational, 150.0);
    assert_eq!(hull.planned_informational, 500.0);

    // Parenthesized amounts are negative.
    assert_eq!(report.rows[1].actual, -50.0);
    // Oil was accepted in February.
    assert_eq!(report.rows[2].actual, 0.0);
}

#[tokio::test]
async fn accumulated_report_from_csv_tables() {
    let datasource = CsvSnapshotDatasource::from_tables(&tables()).unwrap();
    let util = BudgetReconciliationUtil::new(datasource);

    let report = util.compute_accumulated(&aurora(), 2025, 3).await.unwrap();
    let hull = &report.rows[0];
    assert_eq!(hull.budget, 1400.0);
    assert_eq!(hull.actual, 300.0);

    let lubricants = &report.rows[2];
    assert_eq!(lubricants.account, Account::Lubricants);
    // Invoice value plus the February adjustment; April is past the boundary.
    assert_eq!(lubricants.adjustments, 40.0);
    assert_eq!(lubricants.actual, 250.0);
    assert_eq!(lubricants.balance, -50.0);

    let ctx = ReportingContext::accumulated(aurora(), 2025, 3);
    let items = util
        .expand(&ctx, &Account::Lubricants, &DetailQuery::default())
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quote_value, 180.0);
    assert_eq!(items[0].invoice_value, Some(210.0));
    assert_eq!(items[0].value, 210.0);
}

#[tokio::test]
async fn report_rows_export_to_csv_and_json() {
    let datasource = CsvSnapshotDatasource::from_tables(&tables()).unwrap();
    let util = BudgetReconciliationUtil::new(datasource);
    let report = util.compute_accumulated(&aurora(), 2025, 3).await.unwrap();

    let csv = to_csv(&report.rows).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("account,budget,actual,adjustments,balance"));
    assert_eq!(lines.next(), Some("Hull,1400.0,300.0,0.0,1100.0"));

    let json = to_json(&report.rows).unwrap();
    assert!(json.starts_with("[{\"account\":\"Hull\""));
}

#[tokio::test]
async fn unknown_quote_status_is_rejected() {
    let mut tables = tables();
    tables.order_quotes =
        "parent_reference_id,vendor,value,invoice_value,status,acceptance_date\n\
         OC-1,Marine Coatings,300,,maybe,2025-03-15\n"
            .to_string();
    assert!(CsvSnapshotDatasource::from_tables(&tables).is_err());
}

#[tokio::test]
async fn reads_snapshot_and_config_from_disk() {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "fleet-budget-reconciliation-{}",
        std::process::id()
    ));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let t = tables();
    for (name, content) in [
        ("budgets.csv", &t.budgets),
        ("orders.csv", &t.orders),
        ("assistance.csv", &t.assistance),
        ("order_quotes.csv", &t.order_quotes),
        ("assistance_quotes.csv", &t.assistance_quotes),
        ("fixed_charges.csv", &t.fixed_charges),
        ("adjustments.csv", &t.adjustments),
    ] {
        tokio::fs::write(dir.join(name), content).await.unwrap();
    }
    tokio::fs::write(
        dir.join("config.ron"),
        "(adjustment_policy: Override, accumulated_excluded_accounts: [])",
    )
    .await
    .unwrap();

    let datasource = CsvSnapshotDatasource::from_dir(&dir).await.unwrap();
    let config = ReconciliationConfig::from_file(dir.join("config.ron"))
        .await
        .unwrap();
    assert_eq!(config.adjustment_policy, AdjustmentPolicy::Override);

    let util = BudgetReconciliationUtil::with_config(datasource, config);
    let report = util.compute_accumulated(&aurora(), 2025, 3).await.unwrap();
    let lubricants = report
        .rows
        .iter()
        .find(|r| r.account == Account::Lubricants)
        .unwrap();
    assert_eq!(lubricants.actual, 40.0);

    assert!(CsvSnapshotDatasource::from_dir(dir.join("missing")).await.is_err());
    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
