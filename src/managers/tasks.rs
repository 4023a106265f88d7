use crate::entities::Task;

/// Append a new open task. Blank titles are rejected.
pub fn add_task(tasks: &[Task], title: &str) -> Option<Vec<Task>> {
    if title.trim().is_empty() {
        return None;
    }
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(Task::new(title));
    Some(next)
}

/// Flip `completed` on the task with `id`, leaving every other task untouched
pub fn toggle_task(tasks: &[Task], id: &str) -> Option<Vec<Task>> {
    if !tasks.iter().any(|task| task.id == id) {
        return None;
    }
    Some(
        tasks
            .iter()
            .map(|task| if task.id == id { task.toggled() } else { task.clone() })
            .collect(),
    )
}

/// Remove the task with `id`
pub fn delete_task(tasks: &[Task], id: &str) -> Option<Vec<Task>> {
    let position = tasks.iter().position(|task| task.id == id)?;
    let mut next = tasks.to_vec();
    next.remove(position);
    Some(next)
}
