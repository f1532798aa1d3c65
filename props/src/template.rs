use crate::code::Code;
use crate::function::FunctionProps;
use crate::stack::Stack;
use crate::tracing::Tracing;
use color_eyre::eyre;
use color_eyre::eyre::WrapErr;
use serde_json::{json, Value};

/// CloudFormation document assembled out of rendered descriptors
#[derive(Clone, Debug)]
pub struct Template {
    stack: Stack,
    template: Value,
}

#[derive(Clone, Debug)]
pub struct CfnResource {
    pub name: String,
    pub resource: Value,
}

impl Template {
    pub fn new(stack: &Stack) -> Self {
        Template {
            stack: stack.clone(),
            template: json!({"Resources": {}}),
        }
    }

    /// Add a resource to the CFN template
    fn add_resource(&mut self, CfnResource { name, resource }: CfnResource) {
        self.template
            .get_mut("Resources")
            .unwrap()
            .as_object_mut()
            .unwrap()
            .insert(name, resource);
    }

    /// Environment variables block of a function
    fn environment(props: &FunctionProps) -> Value {
        let variables = props
            .environment
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect::<serde_json::Map<String, Value>>();

        json!({"Variables": variables})
    }

    /// Code location of a function
    ///
    /// Local assets land in the stack's bucket under a key derived from
    /// the stack name, so the deploy side knows where to put the bundle.
    fn code(&self, props: &FunctionProps) -> Value {
        match &props.code {
            Code::Asset { path } => {
                let dir = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "code".to_string());

                json!({
                    "S3Bucket": self.stack.bucket(),
                    "S3Key": format!("{stack}/{dir}.zip", stack = self.stack.name)
                })
            }

            Code::S3 { bucket, key } => json!({"S3Bucket": bucket, "S3Key": key}),
        }
    }

    /// Policy statements granted to the function's role
    ///
    /// Every function may append to its own logs. A function with a
    /// dead-letter queue additionally needs to send to that queue.
    fn policies(props: &FunctionProps) -> Vec<Value> {
        let mut policies = vec![json!({
            "PolicyName": "AppendToLogsPolicy",
            "PolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Action": [
                        "logs:CreateLogGroup",
                        "logs:CreateLogStream",
                        "logs:PutLogEvents"
                    ],
                    "Resource": "*"
                }]
            }
        })];

        if let Some(queue) = &props.dead_letter_queue {
            policies.push(json!({
                "PolicyName": "DeadLetterQueuePolicy",
                "PolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Action": ["sqs:SendMessage"],
                        "Resource": [queue.arn()]
                    }]
                }
            }));
        }

        policies
    }

    /// Render a function and its role into the template
    pub fn add_function(&mut self, name: &str, props: &FunctionProps) {
        let name = self.stack.prefixed(name);

        let mut properties = json!({
            "FunctionName": name,
            "Handler": props.handler,
            "Runtime": props.runtime.as_str(),
            "MemorySize": props.memory_size,
            "Timeout": props.timeout.as_secs(),
            "Architectures": [props.architecture.as_str()],
            "Environment": Self::environment(props),
            "Code": self.code(props),
            "Role": {
                "Fn::GetAtt": [
                    format!("FunctionRole{name}"),
                    "Arn"
                ]
            }
        });

        if let Some(queue) = &props.dead_letter_queue {
            properties["DeadLetterConfig"] = json!({"TargetArn": queue.arn()});
        }

        // Omitted entirely when disabled, keeping the account default
        if props.tracing != Tracing::Disabled {
            properties["TracingConfig"] = json!({"Mode": props.tracing.as_str()});
        }

        self.add_resource(CfnResource {
            name: format!("Function{name}"),
            resource: json!({
                "Type": "AWS::Lambda::Function",
                "Properties": properties
            }),
        });

        self.add_resource(CfnResource {
            name: format!("FunctionRole{name}"),
            resource: json!({
                "Type": "AWS::IAM::Role",
                "Properties": {
                    "AssumeRolePolicyDocument": {
                        "Version": "2012-10-17",
                        "Statement": [{
                            "Effect": "Allow",
                            "Principal": {
                                "Service": ["lambda.amazonaws.com"]
                            },
                            "Action": ["sts:AssumeRole"]
                        }]
                    },
                    "Path": "/",
                    "Policies": Self::policies(props)
                }
            }),
        });
    }

    pub fn json(&self) -> &Value {
        &self.template
    }

    pub fn to_string_pretty(&self) -> eyre::Result<String> {
        serde_json::to_string_pretty(&self.template).wrap_err("Failed to serialize the template")
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.template)
    }
}
