//! 静态页面更新逻辑

use crate::message::ContentMessage;
use crate::model::{actions, App};

use super::navigation::go_to;

/// 处理静态页面消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let page_actions = actions(app.navigation.page());

    match msg {
        ContentMessage::ScrollUp => app.page.scroll_up(),
        ContentMessage::ScrollDown => app.page.scroll_down(),
        ContentMessage::PreviousAction => app.page.previous_action(),
        ContentMessage::NextAction => app.page.next_action(page_actions.len()),
        ContentMessage::Activate => {
            if let Some(action) = page_actions.get(app.page.action) {
                go_to(app, action.target.path());
            }
        }
    }
}
