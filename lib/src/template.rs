//! Typed rendering of the per-node Terraform block.

use std::fmt;

/// Port every runner listens on and dials its peers at.
pub const BENCH_PORT: u16 = 4100;

/// Everything that varies between the per-region resource blocks.
///
/// Rendering goes through `Display` with typed fields rather than token
/// substitution, so literal text in the template can never collide with a
/// placeholder.
pub struct NodeBlock<'a> {
    pub region: &'a str,
    pub ami: &'a str,
    pub id: usize,
    pub message_size: &'a str,
    pub message_rate: &'a str,
    /// Terraform list literal naming every instance in the table.
    pub depends_on: &'a str,
    /// Space-joined `host:port` endpoints of every other region.
    pub peers_addrs: &'a str,
}

impl fmt::Display for NodeBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "
resource \"aws_security_group\" \"sg-{region}\" {{
  provider        = aws.{region}
  name        = \"allow_all\"

  ingress {{
    from_port        = 0
    to_port          = 0
    protocol         = \"-1\"
    cidr_blocks      = [\"0.0.0.0/0\"]
  }}

  egress {{
    from_port        = 0
    to_port          = 0
    protocol         = \"-1\"
    cidr_blocks      = [\"0.0.0.0/0\"]
  }}

  tags = {{
    Name = \"experiment\"
  }}
}}

resource \"aws_key_pair\" \"key-{region}\" {{
  provider        = aws.{region}
  key_name   = \"my-terraform-key-{region}\"
  public_key = tls_private_key.experiment.public_key_openssh
}}

resource \"aws_instance\" \"instance-{region}\" {{
  provider        = aws.{region}
  ami             = \"{ami}\"
  instance_type   = \"t3.micro\"
  key_name = aws_key_pair.key-{region}.key_name
  vpc_security_group_ids = [aws_security_group.sg-{region}.id]

  tags = {{
    Name = \"experiment\"
  }}
  user_data = <<EOF
#!/bin/bash

# Download the binary from the pre-signed S3 URL
curl -o /tmp/binary \"${{var.runner_url}}\"

# Make binary executable
chmod +x /tmp/binary
EOF
}}


resource \"null_resource\" \"prov-{region}\" {{
  depends_on = {depends_on}

  provisioner \"remote-exec\" {{
    connection {{
      host        = aws_instance.instance-{region}.public_ip
      user        = \"ubuntu\"
      private_key = tls_private_key.experiment.private_key_pem
    }}

    inline = [
      \"sleep 30\",
      \"/tmp/binary --id {id} --message-size {message_size} --message-rate {message_rate} --port {port} --peers-addrs {peers_addrs}\"
    ]
  }}
}}
",
            region = self.region,
            ami = self.ami,
            id = self.id,
            message_size = self.message_size,
            message_rate = self.message_rate,
            depends_on = self.depends_on,
            peers_addrs = self.peers_addrs,
            port = BENCH_PORT,
        )
    }
}
