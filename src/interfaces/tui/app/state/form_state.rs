//! 表单状态管理
//!
//! 管理添加链接时的表单输入。只校验 URL 是否为空，标题与短码原样提交。

use crate::manager::CreateForm;

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    Url,
    Title,
    Code,
}

impl EditingField {
    /// 所有字段的顺序
    const ALL: [Self; 3] = [Self::Url, Self::Title, Self::Code];

    /// 切换到下一个字段
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个字段
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Url => "Target URL",
            Self::Title => "Title",
            Self::Code => "Short Code",
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    pub url: String,
    pub title: String,
    pub code: String,
    /// 提交时 URL 为空的提示
    pub url_error: Option<String>,
    /// 当前编辑的字段
    pub currently_editing: Option<EditingField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空所有输入，光标回到 URL
    pub fn reset(&mut self) {
        self.url.clear();
        self.title.clear();
        self.code.clear();
        self.url_error = None;
        self.currently_editing = Some(EditingField::Url);
    }

    /// 切换到下一个编辑字段
    pub fn toggle_field(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.next(),
            None => EditingField::default(),
        });
    }

    /// 切换到上一个编辑字段
    pub fn toggle_field_back(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.prev(),
            None => EditingField::default(),
        });
    }

    pub fn value(&self, field: EditingField) -> &str {
        match field {
            EditingField::Url => &self.url,
            EditingField::Title => &self.title,
            EditingField::Code => &self.code,
        }
    }

    fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.currently_editing {
            Some(EditingField::Url) => Some(&mut self.url),
            Some(EditingField::Title) => Some(&mut self.title),
            Some(EditingField::Code) => Some(&mut self.code),
            None => None,
        }
    }

    /// 向当前编辑字段添加字符
    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut() {
            input.push(c);
        }
        self.clear_url_error();
    }

    /// 从当前编辑字段删除最后一个字符
    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
        }
        self.clear_url_error();
    }

    /// 编辑 URL 后清除提示
    fn clear_url_error(&mut self) {
        if self.currently_editing == Some(EditingField::Url) {
            self.url_error = None;
        }
    }

    /// 提交前校验，URL 必填
    pub fn validate_for_submit(&mut self) -> bool {
        self.url_error = self
            .url
            .trim()
            .is_empty()
            .then(|| "URL is required".to_string());
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.url_error.is_some()
    }

    pub fn to_create_form(&self) -> CreateForm {
        CreateForm::new(self.url.clone())
            .with_title(self.title.clone())
            .with_code(self.code.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_field_cycle() {
        assert_eq!(EditingField::Url.next(), EditingField::Title);
        assert_eq!(EditingField::Title.next(), EditingField::Code);
        assert_eq!(EditingField::Code.next(), EditingField::Url);
        assert_eq!(EditingField::Url.prev(), EditingField::Code);
    }

    #[test]
    fn test_form_state_input() {
        let mut form = FormState::new();
        form.reset();
        form.push_char('h');
        form.push_char('x');
        form.pop_char();
        assert_eq!(form.url, "h");

        form.toggle_field();
        form.push_char('T');
        assert_eq!(form.title, "T");
        assert_eq!(form.value(EditingField::Title), "T");
    }

    #[test]
    fn test_code_is_submitted_as_typed() {
        let mut form = FormState::new();
        form.reset();
        form.url = "https://x.com".into();
        form.currently_editing = Some(EditingField::Code);
        for c in "my code/x".chars() {
            form.push_char(c);
        }

        assert!(form.validate_for_submit());
        assert_eq!(form.to_create_form().code, "my code/x");
    }

    #[test]
    fn test_typing_url_clears_error() {
        let mut form = FormState::new();
        form.reset();
        assert!(!form.validate_for_submit());
        form.push_char('h');
        assert!(!form.has_errors());
    }

    #[test]
    fn test_submit_requires_url() {
        let mut form = FormState::new();
        form.reset();
        form.url = "   ".into();
        assert!(!form.validate_for_submit());
        assert_eq!(form.url_error.as_deref(), Some("URL is required"));

        form.url = "https://x.com".into();
        assert!(form.validate_for_submit());
    }

    #[test]
    fn test_to_create_form() {
        let mut form = FormState::new();
        form.url = "https://x.com".into();
        form.title = "X".into();
        let create = form.to_create_form();
        assert_eq!(create.url, "https://x.com");
        assert_eq!(create.title, "X");
        assert!(create.code.is_empty());
    }
}
