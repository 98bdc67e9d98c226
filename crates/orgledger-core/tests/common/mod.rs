use orgledger_core::{Employee, EmployeeId, OrgChart, Store};

/// Shorthand for building ids in assertions
#[allow(dead_code)]
pub fn id(n: u32) -> EmployeeId {
    EmployeeId(n)
}

/// Subordinate ids of `n` as plain integers, ascending
#[allow(dead_code)]
pub fn subs(chart: &OrgChart, n: u32) -> Vec<u32> {
    chart
        .subordinates_of(EmployeeId(n))
        .unwrap()
        .iter()
        .map(|e| e.0)
        .collect()
}

fn employee(n: u32, name: &str, subordinates: &[u32]) -> Employee {
    Employee::new(EmployeeId(n), name).with_subordinates(subordinates.iter().map(|s| EmployeeId(*s)))
}

/// The fifteen-person sample roster
///
/// ```text
/// 1 Mark Zuckerberg
///   2 Sarah Donald
///     6 Cassandra Reynolds
///       11 Mary Blue
///       12 Bob Saget
///         14 Tina Teff
///           15 Will Turner
///   3 Tyler Simpson
///     7 Harry Tobs
///       13 Thomas Brown
///     8 George Carrey
///     9 Gary Styles
///   4 Bruce Willis
///   5 Georgina Flangy
///     10 Sophie Turner
/// ```
#[allow(dead_code)]
pub fn sample_store() -> Store {
    let ceo = employee(1, "Mark Zuckerberg", &[2, 3, 4, 5]);
    Store::from_roster(
        ceo,
        [
            employee(2, "Sarah Donald", &[6]),
            employee(3, "Tyler Simpson", &[7, 8, 9]),
            employee(4, "Bruce Willis", &[]),
            employee(5, "Georgina Flangy", &[10]),
            employee(6, "Cassandra Reynolds", &[11, 12]),
            employee(7, "Harry Tobs", &[13]),
            employee(8, "George Carrey", &[]),
            employee(9, "Gary Styles", &[]),
            employee(10, "Sophie Turner", &[]),
            employee(11, "Mary Blue", &[]),
            employee(12, "Bob Saget", &[14]),
            employee(13, "Thomas Brown", &[]),
            employee(14, "Tina Teff", &[15]),
            employee(15, "Will Turner", &[]),
        ],
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn sample_chart() -> OrgChart {
    OrgChart::new(sample_store())
}
