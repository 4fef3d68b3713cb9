mod common;

use common::{seeded_state, spawn_portal, SharedState};
use meridian::app::App;
use meridian::client::PortalClient;
use meridian::notify::NoticeKind;

async fn setup() -> (App, SharedState) {
    let state = seeded_state();
    let url = spawn_portal(state.clone()).await;
    let mut app = App::new(PortalClient::new(url));
    assert!(app.load().await);
    (app, state)
}

mod selection {
    use super::*;

    #[tokio::test]
    async fn secondary_tag_shows_its_stored_detail_panel() {
        let (mut app, _state) = setup().await;
        assert!(app.select_primary("耳鼻喉"));
        let panel = app.select_secondary("左耳").expect("panel");

        // Literal stored content, not the fallback.
        assert!(panel.contains("中医认为耳为肾之窍"));
        assert!(!panel.contains("左耳是人体重要器官"));
        assert!(app.surfaces().nav_menu.contains("● 左耳"));
    }

    #[tokio::test]
    async fn unknown_secondary_is_rejected_with_a_notice() {
        let (mut app, _state) = setup().await;
        assert!(app.select_secondary("膝盖").is_none());
        let notice = app.last_notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.reason.as_deref().unwrap().contains("膝盖"));
    }

    #[tokio::test]
    async fn deleting_the_expanded_category_collapses_it() {
        let (mut app, _state) = setup().await;
        assert!(app.select_primary("心脏"));
        assert!(app.delete_primary("心脏").await);

        assert_eq!(app.selection().primary(), None);
        assert!(!app.surfaces().nav_menu.contains("心脏"));
    }

    #[tokio::test]
    async fn renaming_away_the_active_secondary_deactivates_it() {
        let (mut app, _state) = setup().await;
        app.select_primary("心脏");
        app.select_secondary("心悸");
        assert!(app.rename_secondary("心脏", "心悸", "心律失常").await);

        assert_eq!(app.selection().secondary(), None);
        assert!(app.surfaces().nav_menu.contains("心律失常"));
    }
}

mod notices {
    use super::*;

    #[tokio::test]
    async fn successful_mutation_records_a_success_notice() {
        let (mut app, _state) = setup().await;
        assert!(app.add_primary("脾").await);
        let notice = app.last_notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.action, "添加一级标签成功");
    }

    #[tokio::test]
    async fn rejected_mutation_names_the_action_and_the_server_reason() {
        let (mut app, state) = setup().await;
        state.lock().unwrap().reject = Some("没有权限".to_string());

        assert!(!app.delete_primary("肝脏").await);
        let notice = app.last_notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.action, "删除标签失败");
        assert!(notice.reason.as_deref().unwrap().contains("没有权限"));
        // The mirror still holds the category.
        assert!(app.surfaces().nav_menu.contains("肝脏"));
    }

    #[tokio::test]
    async fn local_validation_failure_uses_the_same_channel() {
        let (mut app, state) = setup().await;
        assert!(!app.add_primary("   ").await);
        let notice = app.last_notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        // Nothing reached the portal.
        assert_eq!(state.lock().unwrap().primary.len(), 3);
    }
}
