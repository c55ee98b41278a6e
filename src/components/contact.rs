use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content;
use crate::state::form::{ContactForm, Field};
use crate::state::nav::Section;
use crate::state::submission::SubmissionStatus;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactProps {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let input = |field: Field, kind: &'static str, required: bool| {
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        });
        html! {
            <input type={kind} name={field.name()} value={props.form.get(field).to_string()} required={required} oninput={oninput} />
        }
    };

    let on_message = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((Field::Message, area.value()));
        })
    };

    let sending = props.status.is_sending();

    html! {
        <section id={Section::Contact.id()} class="contact container">
            <h2>{"Contact"}</h2>
            <div class="contact-grid">
                <div class="contact-info">
                    <p><strong>{content::BUSINESS_NAME}</strong></p>
                    <p>{"📞 Phone: "}<a href={content::PHONE_LINK}>{content::PHONE_DISPLAY}</a></p>
                    <p>{"📧 Email: "}<a href={content::mailto_link()}>{content::EMAIL}</a></p>
                    <p>{"🏠 Serving Dublin and nearby towns."}</p>
                </div>

                <form class="contact-form" onsubmit={onsubmit}>
                    <label>{"Name"}{ input(Field::Name, "text", true) }</label>
                    <label>{"Email"}{ input(Field::Email, "email", true) }</label>
                    <label>{"Phone"}{ input(Field::Phone, "tel", false) }</label>
                    <label>
                        {"Message"}
                        <textarea
                            name={Field::Message.name()}
                            rows="4"
                            required={true}
                            value={props.form.message.clone()}
                            oninput={on_message}
                        />
                    </label>

                    <div class="form-row">
                        <button class="btn btn-primary" type="submit" disabled={sending}>
                            { if sending { "Sending..." } else { "Send Message" } }
                        </button>
                        <a class="btn btn-outline" href={content::CALL_LINK}>{"Call Us"}</a>
                        <a
                            href={content::whatsapp_link()}
                            class="whatsapp-float"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Chat on WhatsApp"
                        >
                            <img src={content::WHATSAPP_ICON} alt="WhatsApp" />
                        </a>
                    </div>
                </form>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PopupProps {
    pub status: SubmissionStatus,
    pub visible: bool,
}

#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    match (props.visible, props.status.popup_message()) {
        (true, Some(message)) => html! {
            <div class={classes!("popup", props.status.class())} role="status">{message}</div>
        },
        _ => html! {},
    }
}
