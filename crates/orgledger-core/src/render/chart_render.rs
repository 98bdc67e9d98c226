use std::collections::HashSet;
use std::fmt::Write;

use crate::model::EmployeeId;
use crate::ops::Store;

/// Render the org chart as an indented outline
///
/// Starts at the root and walks subordinates in id order, two spaces per
/// level:
///
/// ```text
/// 1 Mark Zuckerberg
///   2 Sarah Donald
///     6 Cassandra Reynolds
/// ```
///
/// Employees not reachable from the root (only possible when a caller broke
/// the move precondition) are listed afterwards under `(detached)`.
pub fn render_chart(store: &Store) -> String {
    let mut output = String::new();
    let mut visited = HashSet::new();

    render_subtree(store, store.root_id(), 0, &mut visited, &mut output);

    let detached: Vec<_> = store
        .list_employees()
        .into_iter()
        .filter(|e| !visited.contains(&e.id))
        .collect();

    if !detached.is_empty() {
        output.push_str("(detached)\n");
        for employee in detached {
            let _ = writeln!(output, "  {} {}", employee.id, employee.name);
        }
    }

    output
}

fn render_subtree(
    store: &Store,
    id: EmployeeId,
    depth: usize,
    visited: &mut HashSet<EmployeeId>,
    output: &mut String,
) {
    if !visited.insert(id) {
        return;
    }

    let Ok(employee) = store.find_employee(id) else {
        return;
    };

    let _ = writeln!(output, "{}{} {}", "  ".repeat(depth), employee.id, employee.name);

    for sub_id in &employee.subordinates {
        render_subtree(store, *sub_id, depth + 1, visited, output);
    }
}

/// Render just one employee and its direct subordinates on a single line,
/// e.g. `3 Tyler Simpson -> [7, 8, 9]`
pub fn render_employee_line(store: &Store, id: EmployeeId) -> Option<String> {
    let employee = store.find_employee(id).ok()?;
    let subs: Vec<String> = employee.subordinates.iter().map(|s| s.to_string()).collect();
    Some(format!("{} {} -> [{}]", employee.id, employee.name, subs.join(", ")))
}
