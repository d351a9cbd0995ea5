//! Cascading select controller
//!
//! Binds one sourate select to its page select(s) and renders the
//! [`hifz_core`] state machine into them. One controller is instantiated
//! per wiring row; each runs its own dispatch loop.

use std::cell::RefCell;
use std::rc::Rc;

use hifz_core::{update, CascadeMsg, CascadeState, Command};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlSelectElement};

use crate::dom;
use crate::fetch;
use crate::wiring::SelectBinding;

struct Controller {
    state: CascadeState,
    page_selects: Vec<HtmlSelectElement>,
}

impl Controller {
    /// Render the current state into every bound page select. Both selects
    /// of a start/end pair receive identical content.
    fn render(&self) {
        for select in &self.page_selects {
            match self.state.placeholder() {
                Some(text) => dom::set_placeholder(select, text),
                None => {
                    dom::clear_options(select);
                    for page in &self.state.options {
                        dom::append_option(select, &page.value, &page.label);
                    }
                }
            }
            select.set_disabled(self.state.disabled());
        }
    }
}

/// Bind one sourate select to its page selects.
///
/// A missing sourate or first page select aborts the binding: not every
/// page carries every form. A missing second page select only narrows the
/// binding to a single page select.
pub fn bind(document: &Document, binding: &SelectBinding) {
    let Some(sourate) = dom::typed_element_by_id::<HtmlSelectElement>(document, binding.sourate)
    else {
        log::debug!("select #{} absent, skipping binding", binding.sourate);
        return;
    };
    let Some(first) = dom::typed_element_by_id::<HtmlSelectElement>(document, binding.first_page)
    else {
        log::debug!("select #{} absent, skipping binding", binding.first_page);
        return;
    };

    let mut page_selects = vec![first];
    if let Some(id) = binding.second_page {
        if let Some(second) = dom::typed_element_by_id::<HtmlSelectElement>(document, id) {
            page_selects.push(second);
        }
    }

    let controller = Rc::new(RefCell::new(Controller {
        state: CascadeState::new(),
        page_selects,
    }));

    let on_change = {
        let controller = Rc::clone(&controller);
        let sourate = sourate.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            dispatch(
                &controller,
                CascadeMsg::SourateChanged {
                    value: sourate.value(),
                },
            );
        })
    };
    let _ = sourate.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    // The listener lives for the page lifetime.
    on_change.forget();

    // Initial state: load immediately when the template pre-selected a
    // sourate, otherwise show the awaiting placeholder.
    dispatch(
        &controller,
        CascadeMsg::SourateChanged {
            value: sourate.value(),
        },
    );
}

/// Run one turn of the update loop: transition, render, execute the effect.
///
/// The borrow is released before the fetch is spawned, so re-entry from the
/// settlement can never observe a held RefCell.
fn dispatch(controller: &Rc<RefCell<Controller>>, msg: CascadeMsg) {
    let command = {
        let mut ctrl = controller.borrow_mut();
        let command = update(&mut ctrl.state, msg);
        ctrl.render();
        command
    };

    if let Some(Command::FetchPages { sourate_index, seq }) = command {
        let controller = Rc::clone(controller);
        spawn_local(async move {
            let result = fetch::fetch_pages(&sourate_index).await;
            dispatch(&controller, CascadeMsg::PagesLoaded { seq, result });
        });
    }
}
