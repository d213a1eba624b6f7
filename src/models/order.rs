use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    #[default]
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
    Omt,
    Cash,
}

impl Delivery {
    fn from_form(value: &str) -> Self {
        match value {
            "no" => Delivery::No,
            _ => Delivery::Yes,
        }
    }
}

impl PaymentMethod {
    fn from_form(value: &str) -> Self {
        match value {
            "paypal" => PaymentMethod::Paypal,
            "omt" => PaymentMethod::Omt,
            "cash" => PaymentMethod::Cash,
            _ => PaymentMethod::CreditCard,
        }
    }
}

/// Submitted order form. Unknown keys are ignored, missing ones stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub selected_books: Vec<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub delivery: Delivery,
    pub payment: PaymentMethod,
    pub feedback: String,
}

impl OrderForm {
    /// Decodes an `application/x-www-form-urlencoded` body, collecting every
    /// `selected_books` occurrence in submission order.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = OrderForm::default();

        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "selected_books" => form.selected_books.push(value.into_owned()),
                "name" => form.name = value.into_owned(),
                "email" => form.email = value.into_owned(),
                "phone" => form.phone = value.into_owned(),
                "location" => form.location = value.into_owned(),
                "delivery" => form.delivery = Delivery::from_form(&value),
                "payment" => form.payment = PaymentMethod::from_form(&value),
                "feedback" => form.feedback = value.into_owned(),
                _ => {}
            }
        }

        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_repeated_selection() {
        let body = b"selected_books=A+Light+in+the+Attic&selected_books=Sharp+Objects&name=Ann&payment=omt&delivery=no&feedback=Fast%21";
        let form = OrderForm::from_urlencoded(body);

        assert_eq!(form.selected_books, vec!["A Light in the Attic", "Sharp Objects"]);
        assert_eq!(form.name, "Ann");
        assert_eq!(form.payment, PaymentMethod::Omt);
        assert_eq!(form.delivery, Delivery::No);
        assert_eq!(form.feedback, "Fast!");
    }

    #[test]
    fn empty_body_yields_defaults() {
        let form = OrderForm::from_urlencoded(b"");
        assert!(form.selected_books.is_empty());
        assert!(form.feedback.is_empty());
        assert_eq!(form.payment, PaymentMethod::CreditCard);
    }
}
