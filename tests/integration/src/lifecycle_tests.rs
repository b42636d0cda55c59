//! Whole-lifecycle scenarios: pull, edit, push and remove against one
//! in-memory API.

use aav_appsync::{Resolver, ResolverInput};
use aav_core::{DeleteOutcome, DeleteReport, Synchronizer};
use aav_fs::ResolverFile;
use aav_test_utils::{ApiCall, FakeResolverApi, ScriptedPrompter, TestResolvers};
use pretty_assertions::assert_eq;

const API: &str = "lifecycle-api";

fn remote(field_name: &str, data_source: &str, request: &str, response: &str) -> Resolver {
    let mut resolver = Resolver::new("Query", field_name);
    resolver.data_source_name = Some(data_source.into());
    resolver.request_mapping_template = Some(request.into());
    resolver.response_mapping_template = Some(response.into());
    resolver
}

#[test]
fn pull_edit_push_remove() {
    let tree = TestResolvers::missing_root();
    let api = FakeResolverApi::new(API)
        .with_data_sources(&["UsersTable", "PostsTable"])
        .with_resolver(remote("getUser", "UsersTable", "get-req", "get-res"))
        .with_resolver(remote("listPosts", "PostsTable", "list-req", "list-res"));

    // Pull creates the tree without asking anything.
    let prompter = ScriptedPrompter::new();
    let sync = Synchronizer::new(tree.config(API), &api, &prompter).unwrap();
    let pulled = sync.pull(true).unwrap();
    assert!(pulled.created_root);
    assert_eq!(pulled.written, vec!["Query.getUser", "Query.listPosts"]);
    assert_eq!(
        tree.listing(),
        vec![
            "Query",
            "Query/getUser",
            "Query/getUser/meta.json",
            "Query/getUser/request.vm",
            "Query/getUser/response.vm",
            "Query/listPosts",
            "Query/listPosts/meta.json",
            "Query/listPosts/request.vm",
            "Query/listPosts/response.vm",
        ]
    );

    // A local edit is pushed as an update with the recorded data source.
    tree.write(ResolverFile::RequestTemplate, "Query", "getUser", "get-req-v2");
    let pushed = sync.push().unwrap();
    assert_eq!(pushed.updated, vec!["Query.getUser", "Query.listPosts"]);
    assert!(pushed.created.is_empty());
    assert_eq!(
        api.resolver("Query", "getUser")
            .unwrap()
            .request_mapping_template
            .as_deref(),
        Some("get-req-v2")
    );

    // A brand new resolver needs a data source.
    tree.write(ResolverFile::ResponseTemplate, "Mutation", "addPost", "add-res");
    let prompter = ScriptedPrompter::new().select(Some(1));
    let sync = Synchronizer::new(tree.config(API), &api, &prompter).unwrap();
    let pushed = sync.push().unwrap();
    assert_eq!(pushed.created, vec!["Mutation.addPost"]);
    assert_eq!(prompter.asked(), vec!["Please set data source for Mutation.addPost"]);
    assert_eq!(
        tree.read_meta("Mutation", "addPost").data_source(),
        Some("PostsTable")
    );

    // Removing the Query type deletes both resolvers remotely.
    let prompter = ScriptedPrompter::new().multi_select(&[1]);
    let sync = Synchronizer::new(tree.config(API), &api, &prompter).unwrap();
    let outcome = sync.delete_type().unwrap();
    assert_eq!(
        outcome,
        DeleteOutcome::Done(DeleteReport {
            removed_types: vec!["Query".into()],
            removed_resolvers: vec!["Query.getUser".into(), "Query.listPosts".into()],
            remote_deletes: vec!["Query.getUser".into(), "Query.listPosts".into()],
            ..DeleteReport::default()
        })
    );
    assert!(api.resolver("Query", "getUser").is_none());
    tree.assert_file_not_exists("Query");

    // The last resolver goes through `rm resolver`.
    let prompter = ScriptedPrompter::new().select(Some(0)).multi_select(&[0]);
    let sync = Synchronizer::new(tree.config(API), &api, &prompter).unwrap();
    sync.delete_resolver().unwrap();
    assert!(api.resolver("Mutation", "addPost").is_none());
    tree.assert_file_exists("Mutation");

    assert_eq!(
        api.write_calls().last(),
        Some(&ApiCall::Delete {
            type_name: "Mutation".into(),
            field_name: "addPost".into(),
        })
    );
}

#[test]
fn empty_root_delete_type_touches_nothing() {
    let tree = TestResolvers::new();
    let api = FakeResolverApi::new(API);
    let prompter = ScriptedPrompter::new();
    let sync = Synchronizer::new(tree.config(API), &api, &prompter).unwrap();

    assert_eq!(sync.delete_type().unwrap(), DeleteOutcome::NothingToDo);
    assert!(api.calls().is_empty());
    assert!(prompter.asked().is_empty());
    assert!(tree.listing().is_empty());
}

#[test]
fn push_new_request_template_with_single_data_source() {
    let tree = TestResolvers::new();
    tree.write(ResolverFile::RequestTemplate, "Query", "getUser", "{}");
    let api = FakeResolverApi::new(API).with_data_sources(&["DS1"]);
    let prompter = ScriptedPrompter::new().select(Some(0));
    let sync = Synchronizer::new(tree.config(API), &api, &prompter).unwrap();

    sync.push().unwrap();

    assert_eq!(
        api.write_calls(),
        vec![ApiCall::Create(ResolverInput {
            type_name: "Query".into(),
            field_name: "getUser".into(),
            data_source_name: "DS1".into(),
            request_mapping_template: Some("{}".into()),
            response_mapping_template: None,
        })]
    );
    assert_eq!(
        tree.read_meta("Query", "getUser"),
        api.resolver("Query", "getUser").unwrap()
    );
}

#[test]
fn second_pull_keeps_declined_template_and_refreshes_meta() {
    let tree = TestResolvers::new();
    let api = FakeResolverApi::new(API)
        .with_resolver(remote("getUser", "UsersTable", "get-req", "get-res"));
    let sync = Synchronizer::new(tree.config(API), &api, ScriptedPrompter::new()).unwrap();
    sync.pull(true).unwrap();
    tree.write(ResolverFile::RequestTemplate, "Query", "getUser", "local-edit");

    let prompter = ScriptedPrompter::new().confirm(false).confirm(true);
    let sync = Synchronizer::new(tree.config(API), &api, &prompter).unwrap();
    let report = sync.pull(false).unwrap();

    assert_eq!(report.kept.len(), 1);
    assert_eq!(prompter.remaining(), 0);
    tree.assert_file_eq("Query/getUser/request.vm", "local-edit");
    tree.assert_file_eq("Query/getUser/response.vm", "get-res");
    assert_eq!(
        tree.read_meta("Query", "getUser"),
        api.resolver("Query", "getUser").unwrap()
    );
}
