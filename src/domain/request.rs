use crate::domain::validation::ValidationError;
use crate::domain::value::{DlrFlag, MessageText, MessageType, Recipient, SenderId};

#[derive(Debug, Clone)]
pub struct SendSms {
    sender: SenderId,
    recipient: Recipient,
    message: MessageText,
    message_type: MessageType,
    dlr: DlrFlag,
}

impl SendSms {
    /// Validate raw inputs into a request with the default type (0) and dlr (1).
    ///
    /// The message is checked first, then the recipient, then the sender.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let message = MessageText::new(message)?;
        let recipient = Recipient::new(recipient)?;
        let sender = SenderId::new(sender)?;
        Ok(Self::from_parts(sender, recipient, message))
    }

    pub fn from_parts(sender: SenderId, recipient: Recipient, message: MessageText) -> Self {
        Self {
            sender,
            recipient,
            message,
            message_type: MessageType::default(),
            dlr: DlrFlag::default(),
        }
    }

    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn with_dlr(mut self, dlr: impl Into<DlrFlag>) -> Self {
        self.dlr = dlr.into();
        self
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn dlr(&self) -> DlrFlag {
        self.dlr
    }
}
