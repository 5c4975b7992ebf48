use gridzip_core::{Axis, Batch, Job};

/// Computes the cross product of all axes, splicing the zipped rows in as
/// one trailing composite axis.
///
/// Ordering is an observable contract: standard nested iteration with the
/// last axis fastest varying, and the row set cycling fastest of all when
/// rows are present. Downstream job index assignment depends on it. The
/// product of zero axes with no rows is a single empty job.
pub fn join_batch(axes: &[Axis], rows: &[Vec<String>]) -> Batch {
    let mut jobs = Vec::new();
    expand(axes, rows, 0, Vec::new(), &mut jobs);
    Batch::new(jobs)
}

fn expand(axes: &[Axis], rows: &[Vec<String>], depth: usize, current: Vec<String>, jobs: &mut Vec<Job>) {
    if depth == axes.len() {
        if rows.is_empty() {
            jobs.push(Job::new(current));
            return;
        }
        for row in rows {
            let mut args = current.clone();
            args.extend(row.iter().cloned());
            jobs.push(Job::new(args));
        }
        return;
    }
    for value in &axes[depth].values {
        let mut next = current.clone();
        next.push(value.clone());
        expand(axes, rows, depth + 1, next, jobs);
    }
}
