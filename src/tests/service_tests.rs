//! Service orchestration tests covering the task-list use-cases.

use std::sync::Arc;

use crate::adapters::memory::{InMemoryTaskListRepository, InMemoryTaskRepository};
use crate::domain::{TaskDomainError, TaskId, TaskListId};
use crate::ports::{TaskListRepositoryError, TaskRepository, TaskRepositoryError};
use crate::services::{TaskListService, TaskListServiceError};
use chrono::{DateTime, Duration, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService =
    TaskListService<InMemoryTaskListRepository<InMemoryTaskRepository>, InMemoryTaskRepository, DefaultClock>;

struct Harness {
    service: Arc<TestService>,
    tasks: Arc<InMemoryTaskRepository>,
}

#[fixture]
fn harness() -> Harness {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let lists = Arc::new(InMemoryTaskListRepository::new(Arc::clone(&tasks)));
    let service = Arc::new(TaskListService::new(
        lists,
        Arc::clone(&tasks),
        Arc::new(DefaultClock),
    ));
    Harness { service, tasks }
}

fn tomorrow() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

fn assert_list_not_found_error<T: std::fmt::Debug>(
    result: Result<T, TaskListServiceError>,
    expected: TaskListId,
) {
    match result {
        Err(TaskListServiceError::Lists(TaskListRepositoryError::NotFound(id))) => {
            assert_eq!(id, expected);
        }
        other => panic!("expected list NotFound error, got {other:?}"),
    }
}

fn assert_task_not_found_error<T: std::fmt::Debug>(
    result: Result<T, TaskListServiceError>,
    expected: TaskId,
) {
    match result {
        Err(TaskListServiceError::Tasks(TaskRepositoryError::NotFound(id))) => {
            assert_eq!(id, expected);
        }
        other => panic!("expected task NotFound error, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn groceries_flow_creates_links_and_resolves(harness: Harness) {
    let list_id = harness
        .service
        .create_task_list("Groceries")
        .await
        .expect("list creation should succeed");

    let task_id = harness
        .service
        .add_task(list_id, "Milk", "2%", tomorrow())
        .await
        .expect("task creation should succeed");
    assert!(!task_id.to_string().is_empty());

    let resolved = harness
        .service
        .get_tasks_by_task_list(list_id)
        .await
        .expect("resolution should succeed");
    assert_eq!(resolved.len(), 1);
    let milk = resolved.first().expect("exactly one task");
    assert_eq!(milk.id(), task_id);
    assert_eq!(milk.title(), "Milk");
    assert_eq!(milk.description(), "2%");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_task_to_missing_list_fails_but_persists_the_task(harness: Harness) {
    let ghost = TaskListId::new();

    let result = harness.service.add_task(ghost, "X", "Y", tomorrow()).await;

    assert_list_not_found_error(result, ghost);
    // The task was created before linking failed and is not rolled back.
    assert_eq!(harness.tasks.task_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_task_surfaces_validation_errors_without_persisting(harness: Harness) {
    let list_id = harness
        .service
        .create_task_list("Groceries")
        .await
        .expect("list creation should succeed");

    let empty_title = harness
        .service
        .add_task(list_id, "", "desc", tomorrow())
        .await;
    assert!(matches!(
        empty_title,
        Err(TaskListServiceError::Domain(TaskDomainError::EmptyTitle))
    ));

    let yesterday = Utc::now() - Duration::days(1);
    let past_deadline = harness.service.add_task(list_id, "X", "", yesterday).await;
    assert!(matches!(
        past_deadline,
        Err(TaskListServiceError::Domain(
            TaskDomainError::DeadlineInPast(_)
        ))
    ));

    assert_eq!(harness.tasks.task_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_applies_only_the_highest_priority_field(harness: Harness) {
    let list_id = harness
        .service
        .create_task_list("Groceries")
        .await
        .expect("list creation should succeed");
    let deadline = tomorrow();
    let task_id = harness
        .service
        .add_task(list_id, "Milk", "2%", deadline)
        .await
        .expect("task creation should succeed");

    harness
        .service
        .update_task(task_id, "Whole milk", "", None)
        .await
        .expect("update should succeed");

    let task = harness
        .tasks
        .get_by_id(task_id)
        .await
        .expect("task should exist");
    assert_eq!(task.title(), "Whole milk");
    assert_eq!(task.description(), "2%");
    assert_eq!(task.deadline(), deadline);

    harness
        .service
        .update_task(task_id, "", "Skimmed", Some(deadline + Duration::days(1)))
        .await
        .expect("update should succeed");

    let task = harness
        .tasks
        .get_by_id(task_id)
        .await
        .expect("task should exist");
    assert_eq!(task.title(), "Whole milk");
    assert_eq!(task.description(), "Skimmed");
    assert_eq!(task.deadline(), deadline);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_is_not_found(harness: Harness) {
    let missing = TaskId::new();
    let result = harness.service.update_task(missing, "X", "", None).await;
    assert_task_not_found_error(result, missing);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_list_renames_in_place(harness: Harness) {
    let list_id = harness
        .service
        .create_task_list("Groceries")
        .await
        .expect("list creation should succeed");

    harness
        .service
        .update_task_list(list_id, "Errands")
        .await
        .expect("rename should succeed");

    let list = harness
        .service
        .get_task_list(list_id)
        .await
        .expect("list should exist");
    assert_eq!(list.name(), "Errands");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_list_is_not_found(harness: Harness) {
    let missing = TaskListId::new();
    let result = harness.service.update_task_list(missing, "Errands").await;
    assert_list_not_found_error(result, missing);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_list_rejects_empty_name(harness: Harness) {
    let result = harness.service.create_task_list("").await;
    assert!(matches!(
        result,
        Err(TaskListServiceError::Domain(TaskDomainError::EmptyListName))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_leaves_dangling_membership(harness: Harness) {
    let list_id = harness
        .service
        .create_task_list("Groceries")
        .await
        .expect("list creation should succeed");
    let task_id = harness
        .service
        .add_task(list_id, "Milk", "2%", tomorrow())
        .await
        .expect("task creation should succeed");

    harness
        .service
        .delete_task(task_id)
        .await
        .expect("delete should succeed");

    // The membership keeps the identifier; resolution omits it.
    let list = harness
        .service
        .get_task_list(list_id)
        .await
        .expect("list should exist");
    assert_eq!(list.task_ids(), [task_id]);

    let resolved = harness
        .service
        .get_tasks_by_task_list(list_id)
        .await
        .expect("resolution should succeed");
    assert!(resolved.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_list_leaves_tasks_in_place(harness: Harness) {
    let list_id = harness
        .service
        .create_task_list("Groceries")
        .await
        .expect("list creation should succeed");
    let task_id = harness
        .service
        .add_task(list_id, "Milk", "2%", tomorrow())
        .await
        .expect("task creation should succeed");

    harness
        .service
        .delete_task_list(list_id)
        .await
        .expect("delete should succeed");

    assert_list_not_found_error(harness.service.get_task_list(list_id).await, list_id);
    let survivor = harness
        .tasks
        .get_by_id(task_id)
        .await
        .expect("task should survive list deletion");
    assert_eq!(survivor.title(), "Milk");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parallel_add_task_calls_lose_no_appends(harness: Harness) {
    let list_id = harness
        .service
        .create_task_list("Groceries")
        .await
        .expect("list creation should succeed");
    let deadline = tomorrow();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = Arc::clone(&harness.service);
            tokio::spawn(async move {
                service
                    .add_task(list_id, &format!("task-{i}"), "", deadline)
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle
            .await
            .expect("spawned task should not panic")
            .expect("add_task should succeed");
    }

    let list = harness
        .service
        .get_task_list(list_id)
        .await
        .expect("list should exist");
    assert_eq!(list.task_ids().len(), 16);

    let resolved = harness
        .service
        .get_tasks_by_task_list(list_id)
        .await
        .expect("resolution should succeed");
    assert_eq!(resolved.len(), 16);
}
