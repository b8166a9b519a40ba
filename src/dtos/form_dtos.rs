use serde::Serialize;

use crate::dtos::post_dtos::PostOut;
use crate::errors::FieldError;
use crate::models::Group;

/// Field metadata, the JSON stand-in for a rendered form.
#[derive(Debug, Serialize)]
pub struct FormFieldOut {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub struct GroupChoiceOut {
    pub id: i64,
    pub title: String,
}

impl From<Group> for GroupChoiceOut {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
        }
    }
}

/// View-model for the post form. Submitted values and field errors ride
/// along on re-render so the client never loses user input.
#[derive(Debug, Serialize)]
pub struct PostFormView {
    pub edit: bool,
    pub fields: Vec<FormFieldOut>,
    pub group_choices: Vec<GroupChoiceOut>,
    pub text: Option<String>,
    pub group: Option<i64>,
    pub image: Option<String>,
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<PostOut>,
}

impl PostFormView {
    pub fn fields() -> Vec<FormFieldOut> {
        vec![
            FormFieldOut {
                name: "group",
                label: "Group",
                help_text: "Choose a group from the list",
                required: false,
            },
            FormFieldOut {
                name: "text",
                label: "Post text",
                help_text: "The body of the post",
                required: true,
            },
            FormFieldOut {
                name: "image",
                label: "Image",
                help_text: "Path of an uploaded image",
                required: false,
            },
        ]
    }
}

/// View-model for the comment form on re-render.
#[derive(Debug, Serialize)]
pub struct CommentFormView {
    pub text: Option<String>,
    pub errors: Vec<FieldError>,
}
