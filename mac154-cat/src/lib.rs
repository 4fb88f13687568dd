use colored::*;
use mac154_frame::*;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent -= 2;
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }
}

pub struct FrameParser {}

impl FrameParser {
    pub fn parse_hex(input: &str) -> Result<String, FormatError> {
        let data = hex::decode(input).unwrap();
        Self::parse(&data)
    }

    pub fn parse(input: &[u8]) -> Result<String, FormatError> {
        let reader = Frame::new(input)?;
        let frame = FrameRepr::parse(&reader);
        let fc = reader.frame_control();

        let mut buffer = String::new();
        let mut w = Writer::new(&mut buffer);

        // -----------------------------------------------------------------
        // Frame Control
        // -----------------------------------------------------------------
        w.writeln("Frame Control".underline().bold().to_string());
        w.increase_indent();
        w.writeln(format!(
            "{}: {}",
            "frame type".bold(),
            format!("{:?}", frame.frame_type).bright_blue(),
        ));
        w.writeln(format!(
            "{}: {}",
            "ack request".bold(),
            frame.ack_request as usize
        ));
        w.writeln(format!(
            "{}: {}",
            "pan id compression".bold(),
            fc.pan_id_compression() as usize
        ));
        w.writeln(format!(
            "{}: {:?}",
            "dst addressing mode".bold(),
            fc.dst_addressing_mode()
        ));
        w.writeln(format!(
            "{}: {:?}",
            "src addressing mode".bold(),
            fc.src_addressing_mode()
        ));
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Sequence Number
        // -----------------------------------------------------------------
        w.writeln(format!("{}", "Sequence Number".underline().bold()));
        w.increase_indent();
        w.writeln(format!(
            "{}: {}",
            "sequence number".bold(),
            frame.sequence_number
        ));
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Addressing
        // -----------------------------------------------------------------
        let addr = &frame.addressing;
        if !addr.dst_address.is_absent() || !addr.src_address.is_absent() {
            w.writeln(format!("{}", "Addressing".underline().bold()));
            w.increase_indent();

            if let Some(dst_pan_id) = addr.dst_pan_id {
                w.writeln(format!("{}: {:x}", "dst pan id".bold(), dst_pan_id));
            }

            if !addr.dst_address.is_absent() {
                w.writeln(format!(
                    "{}: {}{}",
                    "dst addr".bold(),
                    addr.dst_address,
                    if addr.dst_address.is_broadcast() {
                        " (broadcast)"
                    } else {
                        ""
                    }
                ));
            }

            if let Some(src_pan_id) = addr.src_pan_id {
                w.writeln(format!("{}: {:x}", "src pan id".bold(), src_pan_id));
            }

            if !addr.src_address.is_absent() {
                w.writeln(format!(
                    "{}: {}{}",
                    "src addr".bold(),
                    addr.src_address,
                    if addr.src_address.is_broadcast() {
                        " (broadcast)"
                    } else {
                        ""
                    }
                ));
            }
            w.decrease_indent();
        }

        // -----------------------------------------------------------------
        // Command
        // -----------------------------------------------------------------
        if let Some(command) = frame.command {
            w.writeln(format!("{}", "Command".underline().bold()));
            w.increase_indent();
            w.writeln(format!(
                "{}: 0x{:02x}",
                "command id".bold(),
                u8::from(command)
            ));
            w.writeln(format!("{}: {}", "command".bold(), command));
            w.decrease_indent();
        }

        // -----------------------------------------------------------------
        // Payload
        // -----------------------------------------------------------------
        let payload = reader.payload();
        if !payload.is_empty() {
            w.writeln(format!("{}", "Payload".underline().bold()));
            w.increase_indent();
            w.writeln(format!("{:x?}", payload));
        }

        Ok(buffer)
    }
}
