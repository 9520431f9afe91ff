use common::Job;

/// Narrows a board's postings by title keyword and primary department.
///
/// Both matches are case-insensitive substring checks. The keyword pass runs
/// first and the department pass rescans what is left, so a job must satisfy
/// both. Only a job's first department is looked at. `None` or an empty
/// string disables a filter. Order is preserved.
pub fn filter_jobs(jobs: Vec<Job>, keyword: Option<&str>, department: Option<&str>) -> Vec<Job> {
    let mut filtered = jobs;

    if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
        filtered.retain(|job| job.title_contains(keyword));
    }

    if let Some(department) = department.filter(|d| !d.is_empty()) {
        filtered.retain(|job| job.department_contains(department));
    }

    filtered
}
