use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::models::ScriptLine;

/// 对读练习错误
#[derive(Error, Debug)]
pub enum PracticeError {
    /// 未选择角色时开始练习被拒绝，状态不变
    #[error("未选择角色，无法开始对读练习")]
    CharacterNotSelected,

    #[error("剧本中不存在角色: {0}")]
    UnknownCharacter(String),

    #[error("练习已经开始，不能更换角色")]
    AlreadyStarted,
}

/// 对读练习的会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PracticeState {
    /// 尚未开始
    NotStarted,
    /// 正在播放AI台词，等待播放完成回报
    AwaitingAi,
    /// 等待真人朗读完毕并发出就绪信号
    AwaitingHuman,
    /// 全部台词完成
    Finished,
}

/// AI台词播放完成凭据
///
/// 携带发放时的代数与行号；退出或重新开始后旧凭据全部作废，
/// 迟到的完成回报因此成为空操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiLineTicket {
    epoch: u64,
    line_index: usize,
}

/// 状态迁移产生的外部动作
#[derive(Debug, Clone, PartialEq)]
pub enum PracticeEffect {
    /// 调用外部播放回调朗读一条AI台词；每个行号恰好发出一次
    PlayAiLine {
        text: String,
        ticket: AiLineTicket,
    },
    /// 练习完成
    Finished,
}

/// 交互式对读练习引擎
///
/// 轮替状态机：真人朗读所选角色的台词，其余台词交给外部播放回调。
/// 台词严格顺序推进，第 i+1 条在第 i 条完成前不会处理，
/// 同一时刻最多只有一条台词在播放中
#[derive(Debug)]
pub struct RehearsalSession {
    lines: Vec<ScriptLine>,
    selected_character: String,
    current_line_index: usize,
    completed_lines: HashSet<usize>,
    state: PracticeState,
    /// 会话代数：退出或重新开始时递增，作废在途的播放完成回报
    epoch: u64,
}

impl RehearsalSession {
    pub fn new(lines: Vec<ScriptLine>) -> Self {
        RehearsalSession {
            lines,
            selected_character: String::new(),
            current_line_index: 0,
            completed_lines: HashSet::new(),
            state: PracticeState::NotStarted,
            epoch: 0,
        }
    }

    pub fn state(&self) -> PracticeState {
        self.state
    }

    pub fn selected_character(&self) -> &str {
        &self.selected_character
    }

    pub fn current_line_index(&self) -> usize {
        self.current_line_index
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed_lines.contains(&index)
    }

    /// 选定角色并开始练习
    ///
    /// 前置条件：角色名非空且存在于剧本中，否则拒绝且状态不变。
    /// 开始后角色不可更换，直到退出
    pub fn start(&mut self, character: &str) -> Result<Option<PracticeEffect>, PracticeError> {
        if self.state != PracticeState::NotStarted {
            return Err(PracticeError::AlreadyStarted);
        }
        if character.trim().is_empty() {
            return Err(PracticeError::CharacterNotSelected);
        }
        if !self.lines.iter().any(|line| line.character == character) {
            return Err(PracticeError::UnknownCharacter(character.to_string()));
        }

        self.selected_character = character.to_string();
        self.current_line_index = 0;
        self.completed_lines.clear();

        Ok(self.evaluate_current_line())
    }

    /// 真人发出就绪信号：当前行视为已读完，推进到下一行
    ///
    /// 只在 AwaitingHuman 状态下有效，其余状态下为空操作
    pub fn human_ready(&mut self) -> Option<PracticeEffect> {
        if self.state != PracticeState::AwaitingHuman {
            return None;
        }

        self.complete_and_advance()
    }

    /// 外部播放回调回报一条AI台词播放完成
    ///
    /// 凭据携带过期代数或与当前行不符时为空操作，
    /// 退出练习后迟到的回报不会推进状态
    pub fn ai_line_done(&mut self, ticket: AiLineTicket) -> Option<PracticeEffect> {
        if ticket.epoch != self.epoch {
            return None;
        }
        if self.state != PracticeState::AwaitingAi || ticket.line_index != self.current_line_index {
            return None;
        }

        self.complete_and_advance()
    }

    /// 退出练习：清空会话并作废全部在途回报
    pub fn exit(&mut self) {
        self.epoch += 1;
        self.selected_character.clear();
        self.current_line_index = 0;
        self.completed_lines.clear();
        self.state = PracticeState::NotStarted;
    }

    fn complete_and_advance(&mut self) -> Option<PracticeEffect> {
        self.completed_lines.insert(self.current_line_index);
        self.current_line_index += 1;
        self.evaluate_current_line()
    }

    /// 在当前行上重新评估状态
    ///
    /// 越过末尾进入 Finished；所选角色的行等待真人，其余行发出
    /// 恰好一次播放动作并进入 AwaitingAi
    fn evaluate_current_line(&mut self) -> Option<PracticeEffect> {
        if self.current_line_index >= self.lines.len() {
            self.state = PracticeState::Finished;
            return Some(PracticeEffect::Finished);
        }

        let line = &self.lines[self.current_line_index];
        if line.character == self.selected_character {
            self.state = PracticeState::AwaitingHuman;
            None
        } else {
            self.state = PracticeState::AwaitingAi;
            Some(PracticeEffect::PlayAiLine {
                text: line.text.clone(),
                ticket: AiLineTicket {
                    epoch: self.epoch,
                    line_index: self.current_line_index,
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScriptLine;

    fn three_line_script() -> Vec<ScriptLine> {
        vec![
            ScriptLine::new(0, "A".to_string(), "hi".to_string()),
            ScriptLine::new(1, "B".to_string(), "hey".to_string()),
            ScriptLine::new(2, "A".to_string(), "bye".to_string()),
        ]
    }

    #[test]
    fn test_turn_taking_full_session() {
        let mut session = RehearsalSession::new(three_line_script());

        // 第0行属于A：立即等待真人，不触发播放回调
        let effect = session.start("A").unwrap();
        assert_eq!(effect, None);
        assert_eq!(session.state(), PracticeState::AwaitingHuman);

        // 真人就绪后推进到B的台词，恰好发出一次播放动作
        let effect = session.human_ready();
        let ticket = match effect {
            Some(PracticeEffect::PlayAiLine { text, ticket }) => {
                assert_eq!(text, "hey", "播放动作应该携带B的台词");
                ticket
            }
            other => panic!("应该发出播放动作，实际: {:?}", other),
        };
        assert_eq!(session.state(), PracticeState::AwaitingAi);

        // 播放完成后推进到A的台词
        let effect = session.ai_line_done(ticket);
        assert_eq!(effect, None);
        assert_eq!(session.state(), PracticeState::AwaitingHuman);
        assert_eq!(session.current_line_index(), 2);

        // 最后一条完成后进入 Finished
        let effect = session.human_ready();
        assert_eq!(effect, Some(PracticeEffect::Finished));
        assert_eq!(session.state(), PracticeState::Finished);
        assert!(session.is_completed(0));
        assert!(session.is_completed(1));
        assert!(session.is_completed(2));
    }

    #[test]
    fn test_start_without_character_is_rejected() {
        let mut session = RehearsalSession::new(three_line_script());

        let err = session.start("").unwrap_err();
        assert!(matches!(err, PracticeError::CharacterNotSelected));
        assert_eq!(session.state(), PracticeState::NotStarted, "拒绝后状态不变");

        let err = session.start("C").unwrap_err();
        assert!(matches!(err, PracticeError::UnknownCharacter(_)));
        assert_eq!(session.state(), PracticeState::NotStarted);
    }

    #[test]
    fn test_first_line_belongs_to_ai() {
        let mut session = RehearsalSession::new(three_line_script());

        // 选B：第0行是A的，开始即进入 AwaitingAi
        let effect = session.start("B").unwrap();
        assert!(matches!(
            effect,
            Some(PracticeEffect::PlayAiLine { ref text, .. }) if text == "hi"
        ));
        assert_eq!(session.state(), PracticeState::AwaitingAi);
    }

    #[test]
    fn test_stale_ticket_after_exit_is_noop() {
        let mut session = RehearsalSession::new(three_line_script());
        session.start("B").unwrap();

        // 拿到在途凭据后退出
        let ticket = match session.inflight_ai_ticket() {
            Some(t) => t,
            None => panic!("应该存在在途播放"),
        };
        session.exit();
        assert_eq!(session.state(), PracticeState::NotStarted);

        // 迟到的完成回报必须是空操作
        let effect = session.ai_line_done(ticket);
        assert_eq!(effect, None);
        assert_eq!(session.current_line_index(), 0, "过期回报不应该推进行号");
        assert_eq!(session.state(), PracticeState::NotStarted);
    }

    #[test]
    fn test_human_ready_outside_awaiting_human_is_noop() {
        let mut session = RehearsalSession::new(three_line_script());
        session.start("B").unwrap();

        // AwaitingAi 状态下真人信号无效
        assert_eq!(session.human_ready(), None);
        assert_eq!(session.state(), PracticeState::AwaitingAi);
        assert_eq!(session.current_line_index(), 0);
    }

    #[test]
    fn test_cannot_change_character_once_started() {
        let mut session = RehearsalSession::new(three_line_script());
        session.start("A").unwrap();

        let err = session.start("B").unwrap_err();
        assert!(matches!(err, PracticeError::AlreadyStarted));
        assert_eq!(session.selected_character(), "A");
    }

    impl RehearsalSession {
        /// 测试辅助：取当前在途AI台词的凭据
        fn inflight_ai_ticket(&self) -> Option<AiLineTicket> {
            if self.state == PracticeState::AwaitingAi {
                Some(AiLineTicket {
                    epoch: self.epoch,
                    line_index: self.current_line_index,
                })
            } else {
                None
            }
        }
    }
}
